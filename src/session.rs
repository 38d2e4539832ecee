#![cfg(feature = "std")]

//! Turn pacing on top of [`GameEngine`].
//!
//! A `Session` forwards the player's attacks to the engine and schedules the
//! opponent's reply as a single delayed task. Replies are delivered on an
//! unbounded channel so the presentation layer can render them when they
//! arrive. The task remembers the engine generation it was scheduled for and
//! drops itself if a restart happened in the meantime.

use std::sync::Arc;

use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::Rng;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

use crate::common::EngineError;
use crate::config::OPPONENT_TURN_DELAY;
use crate::game::{GameEngine, OpponentTurnReport, PlayerAttackReport, RestartSummary};

/// Something the session produced without being asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    /// The delayed opponent move was played.
    OpponentMoved {
        generation: u64,
        report: OpponentTurnReport,
    },
    /// The delayed opponent move could not be played.
    OpponentFailed { generation: u64, error: EngineError },
}

pub struct Session<R: Rng + Send + 'static = SmallRng> {
    engine: Arc<Mutex<GameEngine<R>>>,
    delay: Duration,
    events: mpsc::UnboundedSender<TurnEvent>,
    pending: Option<JoinHandle<()>>,
}

impl<R: Rng + Send + 'static> Session<R> {
    /// Wrap `engine` with the default opponent delay.
    pub fn new(engine: GameEngine<R>) -> (Self, mpsc::UnboundedReceiver<TurnEvent>) {
        Self::with_delay(engine, OPPONENT_TURN_DELAY)
    }

    pub fn with_delay(
        engine: GameEngine<R>,
        delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<TurnEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let session = Self {
            engine: Arc::new(Mutex::new(engine)),
            delay,
            events,
            pending: None,
        };
        (session, rx)
    }

    /// Shared handle to the engine, for rendering.
    pub fn engine(&self) -> Arc<Mutex<GameEngine<R>>> {
        Arc::clone(&self.engine)
    }

    /// `true` while an opponent move is scheduled but not yet played.
    pub fn opponent_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Restart the game, cancelling any scheduled opponent move.
    pub async fn restart(&mut self) -> Result<RestartSummary, EngineError> {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.engine.lock().await.restart()
    }

    /// Play the human's attack and, unless it ended the game, schedule the
    /// opponent's reply.
    pub async fn player_attack(&mut self, index: usize) -> Result<PlayerAttackReport, EngineError> {
        let (report, generation) = {
            let mut engine = self.engine.lock().await;
            let report = engine.player_attack(index)?;
            (report, engine.generation())
        };
        if report.game_over {
            // the previous reply already ran, or the player could not have moved
            self.pending = None;
        } else {
            self.schedule_opponent(generation);
        }
        Ok(report)
    }

    fn schedule_opponent(&mut self, generation: u64) {
        let engine = Arc::clone(&self.engine);
        let events = self.events.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            let mut engine = engine.lock().await;
            if engine.generation() != generation {
                debug!(
                    "dropping opponent move for game {} (now {})",
                    generation,
                    engine.generation()
                );
                return;
            }
            let event = match engine.opponent_turn() {
                Ok(report) => TurnEvent::OpponentMoved { generation, report },
                Err(error) => {
                    warn!("opponent move failed: {}", error);
                    TurnEvent::OpponentFailed { generation, error }
                }
            };
            // receiver gone means nobody is rendering anymore
            let _ = events.send(event);
        }));
    }
}

impl<R: Rng + Send + 'static> Drop for Session<R> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

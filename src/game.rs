use alloc::vec::Vec;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    ai::OpponentAi,
    attack::resolve_attack,
    board::{place_fleet, Fleet, BB},
    common::{AttackResult, EngineError, Winner},
    config::{CELL_COUNT, SHIP_SHAPES},
};

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingPlayerMove,
    AwaitingOpponentMove,
    /// Terminal until [`GameEngine::restart`].
    GameOver(Winner),
}

/// Public view of a freshly started game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct RestartSummary {
    pub generation: u64,
    /// The human's ship cells, for display. The opponent's stay hidden.
    pub human_fleet: Vec<usize>,
}

/// Outcome of the human's attack on the opponent fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct PlayerAttackReport {
    pub index: usize,
    pub result: AttackResult,
    pub game_over: bool,
    pub winner: Option<Winner>,
}

/// Outcome of the opponent's attack on the human fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct OpponentTurnReport {
    pub index: usize,
    pub result: AttackResult,
    pub game_over: bool,
    pub winner: Option<Winner>,
}

/// Core game logic: both fleets, the attack history and the opponent.
pub struct GameEngine<R: Rng = SmallRng> {
    rng: R,
    human_fleet: Fleet,
    opponent_fleet: Fleet,
    /// Marks on the opponent's grid made by the human.
    player_hits: BB,
    player_misses: BB,
    /// Marks on the human's grid made by the opponent.
    opponent_hits: BB,
    opponent_misses: BB,
    opponent: OpponentAi,
    phase: GamePhase,
    generation: u64,
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine and deal the first game.
    pub fn new(rng: R) -> Result<Self, EngineError> {
        let mut engine = Self::with_fleets(rng, Fleet::new(), Fleet::new());
        engine.generation = 0;
        engine.restart()?;
        Ok(engine)
    }

    /// Start a game on fixed fleets instead of random placement.
    pub fn with_fleets(rng: R, human_fleet: Fleet, opponent_fleet: Fleet) -> Self {
        Self {
            rng,
            human_fleet,
            opponent_fleet,
            player_hits: BB::new(),
            player_misses: BB::new(),
            opponent_hits: BB::new(),
            opponent_misses: BB::new(),
            opponent: OpponentAi::new(),
            phase: GamePhase::AwaitingPlayerMove,
            generation: 1,
        }
    }

    /// Throw away the current game and deal a new one.
    ///
    /// Both fleets are placed before any state is touched, so a placement
    /// failure leaves the running game intact.
    pub fn restart(&mut self) -> Result<RestartSummary, EngineError> {
        let human_fleet = place_fleet(&mut self.rng, &SHIP_SHAPES)?;
        let opponent_fleet = place_fleet(&mut self.rng, &SHIP_SHAPES)?;

        self.human_fleet = human_fleet;
        self.opponent_fleet = opponent_fleet;
        self.player_hits = BB::new();
        self.player_misses = BB::new();
        self.opponent_hits = BB::new();
        self.opponent_misses = BB::new();
        self.opponent.reset();
        self.phase = GamePhase::AwaitingPlayerMove;
        self.generation += 1;
        info!("game {} started", self.generation);

        Ok(RestartSummary {
            generation: self.generation,
            human_fleet: self.human_fleet.cells().collect(),
        })
    }

    /// Resolve the human's attack at `index` against the opponent fleet.
    pub fn player_attack(&mut self, index: usize) -> Result<PlayerAttackReport, EngineError> {
        match self.phase {
            GamePhase::GameOver(_) => return Err(EngineError::GameOver),
            GamePhase::AwaitingOpponentMove => return Err(EngineError::NotPlayerTurn),
            GamePhase::AwaitingPlayerMove => {}
        }
        if index >= CELL_COUNT {
            return Err(EngineError::InvalidIndex(index));
        }
        if self.player_hits.contains(index) || self.player_misses.contains(index) {
            return Err(EngineError::AlreadyAttacked(index));
        }

        let outcome = resolve_attack(index, &mut self.opponent_fleet)?;
        let marks = match outcome.result {
            AttackResult::Hit => &mut self.player_hits,
            AttackResult::Miss => &mut self.player_misses,
        };
        marks
            .set(index)
            .map_err(|_| EngineError::InvalidIndex(index))?;
        debug!("player attacked {}: {:?}", index, outcome.result);

        let winner = self.settle();
        if winner.is_none() {
            self.phase = GamePhase::AwaitingOpponentMove;
        }
        Ok(PlayerAttackReport {
            index,
            result: outcome.result,
            game_over: winner.is_some(),
            winner,
        })
    }

    /// Let the opponent pick and resolve its attack on the human fleet.
    pub fn opponent_turn(&mut self) -> Result<OpponentTurnReport, EngineError> {
        match self.phase {
            GamePhase::GameOver(_) => return Err(EngineError::GameOver),
            GamePhase::AwaitingPlayerMove => return Err(EngineError::NotOpponentTurn),
            GamePhase::AwaitingOpponentMove => {}
        }

        let (index, outcome) = self
            .opponent
            .take_turn(&mut self.rng, &mut self.human_fleet)?;
        let marks = match outcome.result {
            AttackResult::Hit => &mut self.opponent_hits,
            AttackResult::Miss => &mut self.opponent_misses,
        };
        marks
            .set(index)
            .map_err(|_| EngineError::InvalidIndex(index))?;
        debug!("opponent attacked {}: {:?}", index, outcome.result);

        let winner = self.settle();
        if winner.is_none() {
            self.phase = GamePhase::AwaitingPlayerMove;
        }
        Ok(OpponentTurnReport {
            index,
            result: outcome.result,
            game_over: winner.is_some(),
            winner,
        })
    }

    /// Report the winner, if either fleet has been emptied.
    pub fn check_winner(&self) -> Option<Winner> {
        if self.opponent_fleet.is_empty() {
            Some(Winner::Human)
        } else if self.human_fleet.is_empty() {
            Some(Winner::Opponent)
        } else {
            None
        }
    }

    fn settle(&mut self) -> Option<Winner> {
        let winner = self.check_winner();
        if let Some(w) = winner {
            info!("game {} over: {:?} wins", self.generation, w);
            self.phase = GamePhase::GameOver(w);
        }
        winner
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// `false` once the game is over.
    pub fn accepts_attacks(&self) -> bool {
        !matches!(self.phase, GamePhase::GameOver(_))
    }

    /// Incremented by every restart; identifies the current game.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn human_fleet(&self) -> &Fleet {
        &self.human_fleet
    }

    /// Unsunk opponent cells left.
    pub fn opponent_cells_remaining(&self) -> usize {
        self.opponent_fleet.len()
    }

    pub fn opponent(&self) -> &OpponentAi {
        &self.opponent
    }

    /// Human's hits and misses on the opponent grid.
    pub fn player_marks(&self) -> (BB, BB) {
        (self.player_hits, self.player_misses)
    }

    /// Opponent's hits and misses on the human grid.
    pub fn opponent_marks(&self) -> (BB, BB) {
        (self.opponent_hits, self.opponent_misses)
    }
}

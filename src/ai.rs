//! Hunt/target opponent.
//!
//! In hunt mode the opponent fires uniformly at random into cells it has not
//! attacked yet. After a hit it switches to target mode: it keeps extending
//! the line of the current hit streak, or probes the four neighbours of the
//! newest hit, until a miss sends it back to hunting.

use alloc::vec::Vec;
use log::trace;
use rand::Rng;

use crate::attack::{resolve_attack, AttackOutcome};
use crate::board::{Fleet, BB};
use crate::common::{AttackResult, EngineError};
use crate::config::DIRECTIONS;

/// Which selection rule the opponent is currently applying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetingMode {
    /// No active hit streak; selection is random.
    Hunt,
    /// Following up on the hits in the stack.
    Target,
}

/// Targeting state of the computer opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpponentAi {
    available: BB,
    hit_stack: Vec<usize>,
    last_direction: Option<isize>,
}

impl Default for OpponentAi {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentAi {
    /// Fresh state: every cell available, no streak.
    pub fn new() -> Self {
        Self {
            available: BB::full(),
            hit_stack: Vec::new(),
            last_direction: None,
        }
    }

    /// Forget everything from the previous game.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn mode(&self) -> TargetingMode {
        if self.hit_stack.is_empty() {
            TargetingMode::Hunt
        } else {
            TargetingMode::Target
        }
    }

    /// Cells not attacked yet.
    pub fn available(&self) -> BB {
        self.available
    }

    pub fn is_available(&self, index: usize) -> bool {
        self.available.contains(index)
    }

    /// Hits of the current streak, oldest first.
    pub fn hit_stack(&self) -> &[usize] {
        &self.hit_stack
    }

    pub fn last_direction(&self) -> Option<isize> {
        self.last_direction
    }

    /// Pick the next cell and remove it from the available pool.
    ///
    /// Returns `None` once every cell has been attacked.
    pub fn choose_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        let index = match self.follow_up() {
            Some(index) => index,
            None => self.hunt(rng)?,
        };
        // consumed whether it hits or not
        let _ = self.available.clear(index);
        trace!("opponent chose {} in {:?} mode", index, self.mode());
        Some(index)
    }

    /// Update the streak with the outcome of an attack at `index`.
    ///
    /// A hit is pushed onto the stack and, from the second hit on, the
    /// direction is locked to the delta between the first two hits of the
    /// streak. A miss clears the streak. Sinking a ship does not end the
    /// streak; only a miss does.
    pub fn record_result(&mut self, index: usize, result: AttackResult) {
        let _ = self.available.clear(index);
        match result {
            AttackResult::Hit => {
                self.hit_stack.push(index);
                if let &[first, second, ..] = self.hit_stack.as_slice() {
                    self.last_direction = Some(second as isize - first as isize);
                }
            }
            AttackResult::Miss => {
                self.hit_stack.clear();
                self.last_direction = None;
            }
        }
    }

    /// Choose a cell, fire at `fleet` and learn from the result.
    pub fn take_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        fleet: &mut Fleet,
    ) -> Result<(usize, AttackOutcome), EngineError> {
        let index = self
            .choose_target(rng)
            .ok_or(EngineError::NoMovesAvailable)?;
        let outcome = resolve_attack(index, fleet)?;
        self.record_result(index, outcome.result);
        Ok((index, outcome))
    }

    fn follow_up(&mut self) -> Option<usize> {
        let &top = self.hit_stack.last()?;
        if let Some(direction) = self.last_direction {
            match self.probe(top, direction) {
                Some(index) => return Some(index),
                None => self.last_direction = None,
            }
        }
        DIRECTIONS.iter().find_map(|&delta| self.probe(top, delta))
    }

    /// Flat-index step from `from`; row edges are not treated specially.
    fn probe(&self, from: usize, delta: isize) -> Option<usize> {
        from.checked_add_signed(delta)
            .filter(|&index| self.available.contains(index))
    }

    fn hunt<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let remaining = self.available.count_ones();
        if remaining == 0 {
            return None;
        }
        self.available.nth_set(rng.random_range(0..remaining))
    }
}

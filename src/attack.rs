//! Attack resolution against a defending fleet.

use crate::board::Fleet;
use crate::common::{AttackResult, EngineError};

/// Classified result of one attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    pub result: AttackResult,
    /// The defender has no ship cells left after this attack.
    pub fleet_depleted: bool,
}

/// Apply an attack at `index` to `defender`.
///
/// A hit removes the cell from the fleet. The resolver does not remember
/// which cells were attacked; repeat-attack bookkeeping is the caller's job,
/// and attacking an already-hit cell simply reports a miss.
pub fn resolve_attack(index: usize, defender: &mut Fleet) -> Result<AttackOutcome, EngineError> {
    let result = if defender.strike(index)? {
        AttackResult::Hit
    } else {
        AttackResult::Miss
    };
    Ok(AttackOutcome {
        result,
        fleet_depleted: defender.is_empty(),
    })
}

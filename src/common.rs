//! Common types: attack results, winners and engine errors.

/// Result of a single attack against a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum AttackResult {
    /// The attack struck an occupied cell.
    Hit,
    /// The attack landed in open water.
    Miss,
}

/// Side that emptied the other's fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Winner {
    Human,
    Opponent,
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Coordinate outside `[0, N²)`.
    InvalidIndex(usize),
    /// The player already attacked this coordinate in the current game.
    AlreadyAttacked(usize),
    /// No valid position exists for the ship shape at this position in the fleet list.
    PlacementFailed { shape: usize },
    /// A player attack arrived while the opponent's move is pending.
    NotPlayerTurn,
    /// An opponent turn was requested while waiting on the player.
    NotOpponentTurn,
    /// The game has a winner; only a restart is accepted.
    GameOver,
    /// The opponent has attacked every cell already.
    NoMovesAvailable,
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::InvalidIndex(i) => write!(f, "Index {} is out of range", i),
            EngineError::AlreadyAttacked(i) => write!(f, "Cell {} was already attacked", i),
            EngineError::PlacementFailed { shape } => {
                write!(f, "Unable to place ship shape #{}", shape)
            }
            EngineError::NotPlayerTurn => write!(f, "Waiting for the opponent's move"),
            EngineError::NotOpponentTurn => write!(f, "Waiting for the player's move"),
            EngineError::GameOver => write!(f, "Game is over; restart to play again"),
            EngineError::NoMovesAvailable => write!(f, "No cells left to attack"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

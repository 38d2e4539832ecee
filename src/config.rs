use core::time::Duration;

use crate::ship::ShipShape;

pub const GRID_SIZE: usize = 10;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

pub const NUM_SHAPES: usize = 4;
pub const SHIP_SHAPES: [ShipShape; NUM_SHAPES] = [
    ShipShape::new("Skiff", &[0]),
    ShipShape::new("Patrol", &[0, 1]),
    ShipShape::new("Picket", &[0, GRID_SIZE]),
    ShipShape::new("Cutter", &[0, 1, 2]),
];

/// Total number of cells covered by the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 1 + 2 + 2 + 3;

/// Axis deltas probed around the newest hit, in scan order.
pub const DIRECTIONS: [isize; 4] = [-1, 1, -(GRID_SIZE as isize), GRID_SIZE as isize];

/// Random placement attempts per shape before the exhaustive scan takes over.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Pause between the player's move and the opponent's reply.
pub const OPPONENT_TURN_DELAY: Duration = Duration::from_millis(800);

pub const DEFAULT_PLAYER_NAME: &str = "Player";

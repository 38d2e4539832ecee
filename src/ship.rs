//! Ship shape templates and their projection onto the grid.

use alloc::vec::Vec;

use crate::config::GRID_SIZE;

/// Orientation chosen for a shape at placement time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Offsets are applied as flat increments.
    Horizontal,
    /// Offsets are scaled by the grid width.
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

/// A ship template: a name and flat offsets relative to the start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipShape {
    name: &'static str,
    offsets: &'static [usize],
}

impl ShipShape {
    /// Create a new ship shape.
    pub const fn new(name: &'static str, offsets: &'static [usize]) -> Self {
        Self { name, offsets }
    }

    /// Shape's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of cells the shape covers.
    pub fn size(&self) -> usize {
        self.offsets.len()
    }

    /// Relative offsets of the template.
    pub fn offsets(&self) -> &'static [usize] {
        self.offsets
    }

    /// Absolute cells of the shape anchored at `start`.
    ///
    /// Horizontal placement adds each offset to `start`; vertical placement adds
    /// `offset * GRID_SIZE`. Returns `None` when any cell would leave the grid,
    /// including running off the right edge into the next row, so every
    /// projected ship stays a connected group.
    pub fn project(&self, start: usize, orientation: Orientation) -> Option<Vec<usize>> {
        let (row, col) = (start / GRID_SIZE, start % GRID_SIZE);
        let mut cells = Vec::with_capacity(self.offsets.len());
        for &offset in self.offsets {
            let (r, c) = match orientation {
                Orientation::Horizontal => (row + offset / GRID_SIZE, col + offset % GRID_SIZE),
                Orientation::Vertical => (row + offset, col),
            };
            if r >= GRID_SIZE || c >= GRID_SIZE {
                return None;
            }
            cells.push(r * GRID_SIZE + c);
        }
        Some(cells)
    }
}

//! Fleet occupancy on the grid and random fleet placement.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::EngineError;
use crate::config::{CELL_COUNT, GRID_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, ShipShape};

/// Bitboard wide enough for the whole grid.
pub type BB = BitBoard<u128, GRID_SIZE>;

/// Occupied, not yet hit cells of one side's ships.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Fleet {
    cells: BB,
}

impl Fleet {
    /// Create an empty fleet.
    pub fn new() -> Self {
        Self { cells: BB::new() }
    }

    /// Build a fleet from explicit cells, rejecting out-of-range indices.
    pub fn from_cells<I>(cells: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut fleet = Self::new();
        for index in cells {
            fleet.occupy(index)?;
        }
        Ok(fleet)
    }

    /// `true` if `index` holds an unsunk ship cell.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(index)
    }

    /// Number of remaining ship cells.
    pub fn len(&self) -> usize {
        self.cells.count_ones()
    }

    /// `true` when every ship cell has been hit.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Remaining cells in ascending index order.
    pub fn cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter_set()
    }

    /// Raw occupancy mask.
    pub fn mask(&self) -> BB {
        self.cells
    }

    fn occupy(&mut self, index: usize) -> Result<(), EngineError> {
        self.cells
            .set(index)
            .map_err(|_| EngineError::InvalidIndex(index))
    }

    /// Remove `index` from the fleet; returns whether it was occupied.
    pub(crate) fn strike(&mut self, index: usize) -> Result<bool, EngineError> {
        let occupied = self
            .cells
            .get(index)
            .map_err(|_| EngineError::InvalidIndex(index))?;
        if occupied {
            self.cells
                .clear(index)
                .map_err(|_| EngineError::InvalidIndex(index))?;
        }
        Ok(occupied)
    }
}

impl fmt::Debug for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fleet {{ len: {}, cells: {:?} }}", self.len(), self.cells)
    }
}

/// `true` iff every cell lies in `[0, N²)` and none is already in `fleet`.
pub fn is_valid_placement(candidate: &[usize], fleet: &Fleet) -> bool {
    candidate
        .iter()
        .all(|&cell| cell < CELL_COUNT && !fleet.contains(cell))
}

/// Place every shape onto a fresh fleet.
pub fn place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    shapes: &[ShipShape],
) -> Result<Fleet, EngineError> {
    let ships = place_ships(rng, shapes)?;
    let fleet = Fleet::from_cells(ships.into_iter().flatten())?;
    debug!("fleet placed: {} cells", fleet.len());
    Ok(fleet)
}

/// Place every shape and return the cells of each ship, in shape order.
///
/// Each shape gets up to `MAX_PLACEMENT_ATTEMPTS` random start/orientation
/// draws; after that every start and orientation is scanned in order. Cells
/// are committed as soon as a shape is accepted so later shapes cannot overlap
/// earlier ones.
pub fn place_ships<R: Rng + ?Sized>(
    rng: &mut R,
    shapes: &[ShipShape],
) -> Result<Vec<Vec<usize>>, EngineError> {
    let mut committed = Fleet::new();
    let mut ships = Vec::with_capacity(shapes.len());
    for (i, shape) in shapes.iter().enumerate() {
        let cells = random_placement(rng, shape, &committed)
            .or_else(|| scan_placement(shape, &committed))
            .ok_or(EngineError::PlacementFailed { shape: i })?;
        trace!("placed {} at {:?}", shape.name(), cells);
        for &cell in &cells {
            committed.occupy(cell)?;
        }
        ships.push(cells);
    }
    Ok(ships)
}

fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    shape: &ShipShape,
    fleet: &Fleet,
) -> Option<Vec<usize>> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let start = rng.random_range(0..CELL_COUNT);
        let orientation = if rng.random() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        if let Some(cells) = shape.project(start, orientation) {
            if is_valid_placement(&cells, fleet) {
                return Some(cells);
            }
        }
    }
    None
}

fn scan_placement(shape: &ShipShape, fleet: &Fleet) -> Option<Vec<usize>> {
    debug!("random placement exhausted for {}, scanning", shape.name());
    (0..CELL_COUNT)
        .flat_map(|start| Orientation::ALL.into_iter().map(move |o| (start, o)))
        .filter_map(|(start, o)| shape.project(start, o))
        .find(|cells| is_valid_placement(cells, fleet))
}

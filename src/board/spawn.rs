//! Random tile placement

use log::debug;
use rand::{Rng, seq::IndexedRandom};

use super::grid::{Cell, Grid};

/// Probability that a spawned tile is a 4 rather than a 2
pub const SPAWN_FOUR_PROBABILITY: f64 = 0.1;

/// A fresh grid holding two tiles on distinct random cells
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use terminal_2048::board::initialize;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let grid = initialize(&mut rng);
/// assert_eq!(grid.occupied_count(), 2);
/// ```
pub fn initialize(rng: &mut impl Rng) -> Grid {
    let grid = spawn_tile(Grid::empty(), rng);
    spawn_tile(grid, rng)
}

/// Place a 2 (90%) or a 4 (10%) on a uniformly chosen empty cell.
///
/// A full grid is returned unchanged.
pub fn spawn_tile(grid: Grid, rng: &mut impl Rng) -> Grid {
    let empty = grid.empty_cells();
    let Some(&(row, col)) = empty.choose(rng) else {
        return grid;
    };

    let value = if rng.random_bool(SPAWN_FOUR_PROBABILITY) {
        4
    } else {
        2
    };
    debug!("spawned {value} at ({row}, {col})");
    grid.with_cell(row, col, Cell::Tile(value))
}

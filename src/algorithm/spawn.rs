//! Random spawn of a minimum-value tile into an empty cell
//!
//! After every move the engine injects exactly one new tile, chosen uniformly
//! among the currently empty cells and set to the minimum exponent. The spawn
//! runs whether or not the move changed the board; detecting no-op moves is
//! the caller's concern, not the engine's.

use rand::Rng;

use crate::board::grid::Grid;
use crate::io::configuration::SPAWN_EXPONENT;

/// Place one minimum-value tile into a uniformly random empty cell
///
/// Exactly one cell transitions from empty to [`SPAWN_EXPONENT`]; every other
/// cell is untouched. A full grid has no candidate cells and is returned
/// unchanged, which is the engine's defined behavior rather than a sampling
/// error.
pub fn spawn_tile<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Grid {
    let empties: Vec<(usize, usize)> = grid
        .cells()
        .indexed_iter()
        .filter(|&(_, &value)| value == 0)
        .map(|(index, _)| index)
        .collect();

    if empties.is_empty() {
        return grid.clone();
    }

    let choice = rng.random_range(0..empties.len());
    let mut cells = grid.cells().clone();
    if let Some(&(row, col)) = empties.get(choice) {
        if let Some(cell) = cells.get_mut([row, col]) {
            *cell = SPAWN_EXPONENT;
        }
    }
    Grid::from_parts(cells)
}

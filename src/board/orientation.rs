//! Orientation transforms used to normalize directional moves
//!
//! Rather than four near-duplicate slide routines, the engine re-expresses
//! "move in direction D" as "move toward row zero": transform the grid, run
//! the one canonical merge, transform back. The transforms are pure and total
//! over rectangular matrices; only square boards occur in practice.
//!
//! Inverse pairs: [`flip_vertical`] undoes itself, and [`rotate_clockwise`]
//! and [`rotate_counterclockwise`] undo each other exactly.

use ndarray::Array2;

use crate::board::grid::Exponent;

/// Reverse row order: `result[i][j] = g[rows - 1 - i][j]`
///
/// Maps a "toward bottom edge" move onto "toward top edge". Self-inverse.
pub fn flip_vertical(cells: &Array2<Exponent>) -> Array2<Exponent> {
    let (rows, cols) = cells.dim();
    Array2::from_shape_fn((rows, cols), |(i, j)| cells[[rows - 1 - i, j]])
}

/// Quarter turn clockwise: `result[i][j] = g[rows - 1 - j][i]`
///
/// An M×N input produces an N×M output. Maps a "toward left edge" move onto
/// "toward top edge"; [`rotate_counterclockwise`] is its exact inverse.
pub fn rotate_clockwise(cells: &Array2<Exponent>) -> Array2<Exponent> {
    let (rows, cols) = cells.dim();
    Array2::from_shape_fn((cols, rows), |(i, j)| cells[[rows - 1 - j, i]])
}

/// Quarter turn counterclockwise: `result[i][j] = g[j][cols - 1 - i]`
///
/// An M×N input produces an N×M output. Maps a "toward right edge" move onto
/// "toward top edge"; [`rotate_clockwise`] is its exact inverse.
pub fn rotate_counterclockwise(cells: &Array2<Exponent>) -> Array2<Exponent> {
    let (rows, cols) = cells.dim();
    Array2::from_shape_fn((cols, rows), |(i, j)| cells[[j, cols - 1 - i]])
}

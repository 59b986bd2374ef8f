//! Direction dispatch and the public move operations
//!
//! A move in any direction reduces to the canonical merge toward row zero:
//! apply the direction's forward orientation transform, merge, apply the
//! inverse transform, then spawn. The direction set is a closed enum, so
//! "any other input" is unrepresentable here; key parsing at the input
//! boundary simply yields nothing for unrecognized keys.

use rand::Rng;

use crate::algorithm::merge::merge_toward_top;
use crate::algorithm::spawn::spawn_tile;
use crate::board::grid::Grid;
use crate::board::orientation::{flip_vertical, rotate_clockwise, rotate_counterclockwise};
use crate::io::error::Result;

/// A direction to slide and merge tiles toward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the top edge (row zero); the canonical orientation
    Up,
    /// Toward the bottom edge
    Down,
    /// Toward the left edge
    Left,
    /// Toward the right edge
    Right,
}

impl Direction {
    /// All four directions, in dispatch-table order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Map a key to a direction, ignoring anything unrecognized
    ///
    /// Accepts WASD and the vim motion keys, case-insensitive. Returning
    /// `None` is the engine's no-op rule for other input: no state change,
    /// no error.
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            'w' | 'W' | 'k' | 'K' => Some(Self::Up),
            's' | 'S' | 'j' | 'J' => Some(Self::Down),
            'a' | 'A' | 'h' | 'H' => Some(Self::Left),
            'd' | 'D' | 'l' | 'L' => Some(Self::Right),
            _ => None,
        }
    }
}

/// Slide and merge tiles toward `direction`, without spawning
///
/// The forward transform points `direction` at row zero, the canonical merge
/// runs once, and the inverse transform restores the original orientation.
/// Exposed separately from [`apply_move`] so callers can detect whether a
/// move would change the board (the engine itself never checks).
pub fn shift(grid: &Grid, direction: Direction) -> Grid {
    let cells = grid.cells();
    let merged = match direction {
        Direction::Up => merge_toward_top(cells),
        Direction::Down => flip_vertical(&merge_toward_top(&flip_vertical(cells))),
        Direction::Left => rotate_counterclockwise(&merge_toward_top(&rotate_clockwise(cells))),
        Direction::Right => rotate_clockwise(&merge_toward_top(&rotate_counterclockwise(cells))),
    };
    Grid::from_parts(merged)
}

/// Resolve one full move: slide, merge, then spawn one minimum tile
///
/// The spawn runs even when the slide changed nothing, matching the original
/// game's documented behavior. A full post-merge grid skips the spawn and is
/// returned as-is.
pub fn apply_move<R: Rng + ?Sized>(grid: &Grid, direction: Direction, rng: &mut R) -> Grid {
    let merged = shift(grid, direction);
    spawn_tile(&merged, rng)
}

/// Create the session-start grid: all empty, then one spawned tile
///
/// # Errors
///
/// Returns [`crate::EngineError::InvalidDimension`] when `size` is zero or
/// exceeds the configured maximum.
pub fn initial_grid<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Grid> {
    let empty = Grid::empty(size)?;
    Ok(spawn_tile(&empty, rng))
}

/// True when no direction's slide would change the board
///
/// Layered on top of the engine rather than inside it: the move resolution
/// itself never decides game over.
pub fn is_stuck(grid: &Grid) -> bool {
    Direction::ALL
        .iter()
        .all(|&direction| shift(grid, direction) == *grid)
}

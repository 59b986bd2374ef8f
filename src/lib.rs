//! Resolution engine for sliding-tile merge puzzles of the 2048 family
//!
//! The engine stores a square grid of power-of-two exponents (0 = empty cell,
//! k = tile 2^k). A directional command slides every tile toward one edge,
//! merges adjacent equal tiles once per pass, compacts the result, and spawns
//! one minimum-value tile into a uniformly random empty cell. All four
//! directions reduce to a single "merge toward row zero" pass via orientation
//! transforms.

#![forbid(unsafe_code)]

/// Core move resolution: canonical merge, spawn, dispatch, and session state
pub mod algorithm;
/// Board state and orientation transforms
pub mod board;
/// Error types, runtime constants, and the demo command-line shell
pub mod io;

pub use algorithm::dispatch::{Direction, apply_move, initial_grid, is_stuck, shift};
pub use algorithm::session::Session;
pub use board::grid::Grid;
pub use io::error::{EngineError, Result};

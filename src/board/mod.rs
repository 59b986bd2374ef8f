//! Board state and geometry
//!
//! This module contains the board-related functionality:
//! - Grid state storage and read access
//! - Orientation transforms used to normalize directional moves

/// Grid state storage, validation, and read access
pub mod grid;
/// Quarter-turn and flip transforms over rectangular grids
pub mod orientation;

pub use grid::Grid;

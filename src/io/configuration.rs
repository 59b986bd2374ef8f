//! Runtime constants and configurable defaults

use crate::board::grid::Exponent;

/// Classic board dimension of the 2048 family
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Fixed seed for reproducible demo games
pub const DEFAULT_SEED: u64 = 42;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 1_024;

/// Exponent of a freshly spawned tile (displayed value 2)
pub const SPAWN_EXPONENT: Exponent = 1;

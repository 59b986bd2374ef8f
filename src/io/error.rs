//! Error types for engine and front-end operations

use std::fmt;

/// Main error type for engine operations
///
/// The taxonomy is narrow because the engine is pure in-memory computation:
/// malformed board input is rejected at construction, and everything past
/// that boundary is total. An unrecognized direction key is not an error
/// (ignored input), and spawning on a full grid is a defined no-op.
#[derive(Debug)]
pub enum EngineError {
    /// Supplied cell matrix is not square
    NonSquareGrid {
        /// Row count of the rejected matrix
        rows: usize,
        /// Column count of the rejected matrix
        cols: usize,
    },

    /// Requested grid dimension is zero or above the safety limit
    InvalidDimension {
        /// Requested dimension
        size: usize,
        /// Largest dimension the engine accepts
        max: usize,
    },

    /// Failed to read player input in the terminal front-end
    Input {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonSquareGrid { rows, cols } => {
                write!(f, "Grid must be square, got {rows}x{cols}")
            }
            Self::InvalidDimension { size, max } => {
                write!(f, "Grid dimension {size} is outside the valid range 1..={max}")
            }
            Self::Input { source } => {
                write!(f, "Failed to read input: {source}")
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input { source } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        Self::Input { source: err }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, EngineError>;

//! Grid state storage and read access
//!
//! The board is a square matrix of exponent values: 0 marks an empty cell and
//! k (k >= 1) a tile displayed as 2^k. Construction is the single validation
//! gate; every `Grid` in circulation is square with an in-range dimension, so
//! the move and spawn operations downstream never fail.

use std::fmt;

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{EngineError, Result};

/// Exponent stored in a cell; 0 denotes empty, k a tile worth 2^k
///
/// Exponents are unsigned, so the negative-cell class of malformed input is
/// unrepresentable rather than checked.
pub type Exponent = u32;

/// Square board of tile exponents
///
/// The grid dimension is fixed for the lifetime of a session. Every engine
/// operation is a pure function from one `Grid` to a new `Grid`; callers pass
/// values instead of sharing a mutable board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Exponent>,
}

impl Grid {
    /// Create an all-empty square grid of the given dimension
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDimension`] when `size` is zero or
    /// exceeds [`MAX_GRID_DIMENSION`].
    pub fn empty(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_GRID_DIMENSION {
            return Err(EngineError::InvalidDimension {
                size,
                max: MAX_GRID_DIMENSION,
            });
        }
        Ok(Self {
            cells: Array2::zeros((size, size)),
        })
    }

    /// Adopt an existing cell matrix as a grid, rejecting malformed input
    ///
    /// This is the fail-fast boundary for externally supplied state: the
    /// matrix must be square and its dimension in range before any merge or
    /// spawn runs against it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NonSquareGrid`] for rectangular input and
    /// [`EngineError::InvalidDimension`] for a zero or oversized dimension.
    pub fn from_cells(cells: Array2<Exponent>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows != cols {
            return Err(EngineError::NonSquareGrid { rows, cols });
        }
        if rows == 0 || rows > MAX_GRID_DIMENSION {
            return Err(EngineError::InvalidDimension {
                size: rows,
                max: MAX_GRID_DIMENSION,
            });
        }
        Ok(Self { cells })
    }

    /// Wrap cells produced by the engine itself, which preserve validity
    pub(crate) const fn from_parts(cells: Array2<Exponent>) -> Self {
        Self { cells }
    }

    /// Grid dimension (rows, equal to columns)
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Exponent at `(row, col)`, or `None` outside the board
    pub fn get(&self, row: usize, col: usize) -> Option<Exponent> {
        self.cells.get([row, col]).copied()
    }

    /// Borrow the underlying cell matrix
    pub(crate) const fn cells(&self) -> &Array2<Exponent> {
        &self.cells
    }

    /// Iterate over exponents in row-major order (by row, then column)
    pub fn iter(&self) -> impl Iterator<Item = Exponent> + '_ {
        self.cells.iter().copied()
    }

    /// Number of empty cells
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&value| value == 0).count()
    }

    /// Number of occupied cells
    pub fn count_tiles(&self) -> usize {
        self.cells.iter().filter(|&&value| value != 0).count()
    }

    /// Largest exponent on the board (0 when the board is empty)
    pub fn highest_exponent(&self) -> Exponent {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of displayed tile values over all occupied cells
    pub fn displayed_sum(&self) -> u64 {
        self.cells
            .iter()
            .filter(|&&value| value != 0)
            .map(|&value| display_value(value))
            .sum()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = Exponent;
    type IntoIter = std::iter::Copied<ndarray::iter::Iter<'a, Exponent, ndarray::Ix2>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter().copied()
    }
}

/// Displayed value of an exponent: 2^k, saturating far beyond playable range
pub const fn display_value(exponent: Exponent) -> u64 {
    2_u64.saturating_pow(exponent)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 7;
        for (index, row) in self.cells.rows().into_iter().enumerate() {
            if index > 0 {
                let rule = "-".repeat((width + 1) * self.size());
                writeln!(f, "{rule}")?;
            }
            for (col, &value) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                if value == 0 {
                    write!(f, "{:width$}", "")?;
                } else {
                    write!(f, "{:width$}", display_value(value))?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

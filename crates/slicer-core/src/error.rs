//! Error types for grid construction.

use std::error::Error;
use std::fmt;

/// Errors arising from [`BoundedGrid`](crate::BoundedGrid) or backing
/// store construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// An axis has `max < min`.
    InvalidInterval {
        /// The offending axis.
        axis: usize,
        /// Inclusive lower bound supplied for the axis.
        min: i64,
        /// Inclusive upper bound supplied for the axis.
        max: i64,
    },
    /// The `min` and `max` vectors have different lengths.
    DimensionMismatch {
        /// Length of the `min` vector.
        expected: usize,
        /// Length of the `max` vector.
        actual: usize,
    },
    /// Attempted to construct a grid with zero axes.
    EmptyGrid,
    /// `max - min + 1` does not fit in an `i64` on some axis.
    ExtentOverflow {
        /// The offending axis.
        axis: usize,
    },
    /// The total cell count is too large to address in memory.
    CellCountOverflow,
    /// A sample buffer does not hold exactly one sample per grid cell.
    SizeMismatch {
        /// Number of cells in the grid.
        expected: usize,
        /// Number of samples supplied.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval { axis, min, max } => {
                write!(f, "invalid interval on axis {axis}: max {max} < min {min}")
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "dimension mismatch: min has {expected} axes, max has {actual}"
                )
            }
            Self::EmptyGrid => write!(f, "grid must have at least one axis"),
            Self::ExtentOverflow { axis } => {
                write!(f, "extent of axis {axis} overflows i64")
            }
            Self::CellCountOverflow => write!(f, "grid cell count overflows usize"),
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "size mismatch: grid has {expected} cells, got {actual} samples"
                )
            }
        }
    }
}

impl Error for GridError {}

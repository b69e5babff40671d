//! Error types for accessor construction and positioning.

use slicer_core::GridError;
use std::error::Error;
use std::fmt;

/// Errors from the factory, the extended view, and vector moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessError {
    /// The source cannot report bounds or cannot hand out a cursor.
    UnsupportedSource {
        /// What the source failed to provide.
        reason: String,
    },
    /// A coordinate vector or cursor has the wrong number of axes.
    DimensionMismatch {
        /// Number of axes the accessor was built for.
        expected: usize,
        /// Number of axes supplied.
        actual: usize,
    },
    /// A [`FactoryConfig`](crate::FactoryConfig) is inconsistent with the source.
    InvalidConfig {
        /// Which invariant was violated.
        reason: String,
    },
    /// A relative move would take the logical coordinate past the `i64` range.
    CoordinateOverflow {
        /// The axis being moved.
        axis: usize,
        /// Logical coordinate before the move.
        position: i64,
        /// Requested offset.
        delta: i64,
    },
    /// A region passed to the view could not be built.
    Grid(GridError),
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSource { reason } => write!(f, "unsupported source: {reason}"),
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "dimension mismatch: expected {expected} axes, got {actual}"
                )
            }
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
            Self::CoordinateOverflow {
                axis,
                position,
                delta,
            } => write!(
                f,
                "coordinate overflow on axis {axis}: {position} + {delta} exceeds i64"
            ),
            Self::Grid(e) => write!(f, "grid error: {e}"),
        }
    }
}

impl Error for AccessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for AccessError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

//! Axis-aligned integer intervals.

use crate::error::GridError;
use crate::id::Coord;
use std::fmt;

/// An N-dimensional axis-aligned integer interval with inclusive bounds.
///
/// Every axis holds at least one cell: `min[d] <= max[d]` and
/// `dimension[d] = max[d] - min[d] + 1 >= 1`. The grid is immutable once
/// constructed.
///
/// # Examples
///
/// ```
/// use slicer_core::BoundedGrid;
///
/// let grid = BoundedGrid::new(&[0, -2], &[9, 2]).unwrap();
/// assert_eq!(grid.ndim(), 2);
/// assert_eq!(grid.dimension(0), 10);
/// assert_eq!(grid.dimension(1), 5);
/// assert!(grid.contains(&[4, -2]));
/// assert!(!grid.contains(&[10, 0]));
///
/// assert!(BoundedGrid::new(&[3], &[2]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoundedGrid {
    min: Coord,
    max: Coord,
    dimension: Coord,
}

impl BoundedGrid {
    /// Create a grid from inclusive per-axis bounds.
    ///
    /// Returns `Err(GridError::InvalidInterval)` if `max[d] < min[d]` on any
    /// axis, `Err(GridError::DimensionMismatch)` if the slices differ in
    /// length, `Err(GridError::EmptyGrid)` for zero axes, and
    /// `Err(GridError::ExtentOverflow)` if an axis extent exceeds `i64::MAX`.
    pub fn new(min: &[i64], max: &[i64]) -> Result<Self, GridError> {
        if min.len() != max.len() {
            return Err(GridError::DimensionMismatch {
                expected: min.len(),
                actual: max.len(),
            });
        }
        if min.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        let mut dimension = Coord::with_capacity(min.len());
        for (axis, (&lo, &hi)) in min.iter().zip(max).enumerate() {
            if hi < lo {
                return Err(GridError::InvalidInterval {
                    axis,
                    min: lo,
                    max: hi,
                });
            }
            let extent = hi
                .checked_sub(lo)
                .and_then(|span| span.checked_add(1))
                .ok_or(GridError::ExtentOverflow { axis })?;
            dimension.push(extent);
        }
        Ok(Self {
            min: Coord::from_slice(min),
            max: Coord::from_slice(max),
            dimension,
        })
    }

    /// Create a zero-based grid with the given per-axis sizes.
    ///
    /// A size below 1 is reported as `GridError::InvalidInterval`.
    pub fn from_dimensions(dimensions: &[i64]) -> Result<Self, GridError> {
        let min: Coord = dimensions.iter().map(|_| 0).collect();
        let max: Coord = dimensions.iter().map(|&n| n.saturating_sub(1)).collect();
        Self::new(&min, &max)
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.min.len()
    }

    /// Inclusive lower bound on `axis`.
    pub fn min(&self, axis: usize) -> i64 {
        self.min[axis]
    }

    /// Inclusive upper bound on `axis`.
    pub fn max(&self, axis: usize) -> i64 {
        self.max[axis]
    }

    /// Number of cells along `axis`.
    pub fn dimension(&self, axis: usize) -> i64 {
        self.dimension[axis]
    }

    /// All lower bounds.
    pub fn mins(&self) -> &[i64] {
        &self.min
    }

    /// All upper bounds.
    pub fn maxs(&self) -> &[i64] {
        &self.max
    }

    /// All per-axis sizes.
    pub fn dimensions(&self) -> &[i64] {
        &self.dimension
    }

    /// Whether `coord` lies inside the grid on every axis.
    ///
    /// A coordinate of the wrong dimensionality is never contained.
    pub fn contains(&self, coord: &[i64]) -> bool {
        coord.len() == self.ndim()
            && coord
                .iter()
                .zip(self.min.iter().zip(&self.max))
                .all(|(&p, (&lo, &hi))| lo <= p && p <= hi)
    }

    /// Total number of cells, or `None` if the product overflows `u64`.
    pub fn cell_count(&self) -> Option<u64> {
        self.dimension
            .iter()
            .try_fold(1u64, |acc, &n| acc.checked_mul(n as u64))
    }
}

impl fmt::Display for BoundedGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (axis, (lo, hi)) in self.min.iter().zip(&self.max).enumerate() {
            if axis > 0 {
                write!(f, " x ")?;
            }
            write!(f, "[{lo}, {hi}]")?;
        }
        Ok(())
    }
}

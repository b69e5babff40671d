//! Toroidal random access with exact logical out-of-bounds tracking.
//!
//! A [`WrapAccessor`] keeps two coordinate frames in lockstep:
//!
//! - the **logical** position requested by the caller, unbounded, and
//! - the **wrapped** position, which is the delegate cursor's own position
//!   and always lies inside the grid.
//!
//! Samples are read at the wrapped position. Out-of-bounds status is
//! reported for the logical position, per axis and in aggregate, from a
//! flag cache that single-unit steps update in O(1) without any modulo.
//! Only absolute jumps fold coordinates with modulo arithmetic.

use crate::error::AccessError;
use slicer_core::{BoundedGrid, Coord, GridCursor, Step};
use smallvec::SmallVec;

/// Where a logical coordinate lies relative to one axis of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisState {
    /// `min <= position <= max`.
    InBounds,
    /// `position < min`.
    BelowMin,
    /// `position > max`.
    AboveMax,
}

/// Wraparound accessor over a bounded grid cursor.
///
/// Positioned with [`step_forward`](Self::step_forward),
/// [`step_backward`](Self::step_backward), [`set_absolute`](Self::set_absolute)
/// and [`translate`](Self::translate). `Clone` yields an independent
/// accessor with its own copy of the delegate cursor; hand one clone to each
/// traversal thread rather than sharing a single accessor.
///
/// # Examples
///
/// ```
/// use slicer_access::{ArrayGrid, WrapAccessor};
/// use slicer_core::{BoundedGrid, BoundedSource};
///
/// let grid = BoundedGrid::new(&[0], &[9]).unwrap();
/// let img = ArrayGrid::from_fn(grid.clone(), |p| p[0] * 10).unwrap();
/// let mut acc = WrapAccessor::new(grid, img.cursor().unwrap()).unwrap();
///
/// acc.set_absolute(0, 23);
/// assert_eq!(acc.wrapped_position(0), 3);
/// assert_eq!(acc.get(), 30);
/// assert!(acc.is_out_of_bounds());
///
/// acc.set_absolute(0, -3);
/// assert_eq!(acc.wrapped_position(0), 7);
///
/// acc.set_absolute(0, 4);
/// assert!(!acc.is_out_of_bounds());
/// ```
#[derive(Clone, Debug)]
pub struct WrapAccessor<C> {
    cursor: C,
    grid: BoundedGrid,
    position: Coord,
    before_min: Coord,
    past_max: Coord,
    axis_out_of_bounds: SmallVec<[bool; 4]>,
    is_out_of_bounds: bool,
}

impl<C: GridCursor> WrapAccessor<C> {
    /// Build an accessor over `cursor`, which must address `grid`.
    ///
    /// The logical and wrapped positions both start at the grid minimum.
    /// Returns `Err(AccessError::DimensionMismatch)` if the cursor and grid
    /// disagree on the number of axes.
    pub fn new(grid: BoundedGrid, mut cursor: C) -> Result<Self, AccessError> {
        if cursor.ndim() != grid.ndim() {
            return Err(AccessError::DimensionMismatch {
                expected: grid.ndim(),
                actual: cursor.ndim(),
            });
        }
        let n = grid.ndim();
        let mut before_min = Coord::with_capacity(n);
        let mut past_max = Coord::with_capacity(n);
        for axis in 0..n {
            // At the i64 limits the sentinel wraps to a value no single step can reach.
            before_min.push(grid.min(axis).wrapping_sub(1));
            past_max.push(grid.max(axis).wrapping_add(1));
            cursor.move_to(axis, grid.min(axis));
        }
        Ok(Self {
            cursor,
            position: Coord::from_slice(grid.mins()),
            grid,
            before_min,
            past_max,
            axis_out_of_bounds: smallvec::smallvec![false; n],
            is_out_of_bounds: false,
        })
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.position.len()
    }

    /// The grid samples are wrapped into.
    pub fn grid(&self) -> &BoundedGrid {
        &self.grid
    }

    /// The delegate cursor, positioned at the wrapped coordinate.
    pub fn delegate(&self) -> &C {
        &self.cursor
    }

    /// Sample at the wrapped position.
    pub fn get(&self) -> C::Sample {
        self.cursor.get_sample()
    }

    /// Logical coordinate on `axis`.
    pub fn position(&self, axis: usize) -> i64 {
        self.position[axis]
    }

    /// Logical coordinate on every axis.
    pub fn localize(&self) -> &[i64] {
        &self.position
    }

    /// Wrapped coordinate on `axis`; always inside the grid.
    pub fn wrapped_position(&self, axis: usize) -> i64 {
        self.cursor.coordinate(axis)
    }

    /// Wrapped coordinate on every axis.
    pub fn wrapped_coord(&self) -> Coord {
        (0..self.ndim()).map(|d| self.cursor.coordinate(d)).collect()
    }

    /// Whether the logical position lies outside the grid on any axis.
    pub fn is_out_of_bounds(&self) -> bool {
        self.is_out_of_bounds
    }

    /// Whether the logical position lies outside the grid on `axis`.
    pub fn is_out_of_bounds_on_axis(&self, axis: usize) -> bool {
        self.axis_out_of_bounds[axis]
    }

    /// Classify the logical position on `axis`.
    pub fn axis_state(&self, axis: usize) -> AxisState {
        if !self.axis_out_of_bounds[axis] {
            AxisState::InBounds
        } else if self.position[axis] < self.grid.min(axis) {
            AxisState::BelowMin
        } else {
            AxisState::AboveMax
        }
    }

    /// Move one unit forward on `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= self.ndim()`.
    pub fn step_forward(&mut self, axis: usize) {
        let p = self.position[axis] + 1;
        self.position[axis] = p;
        if p == self.grid.min(axis) {
            self.clear_out_of_bounds(axis);
        } else if p == self.past_max[axis] {
            self.mark_out_of_bounds(axis);
        }

        if self.cursor.coordinate(axis) == self.grid.max(axis) {
            self.cursor.move_to(axis, self.grid.min(axis));
        } else {
            self.cursor.step(axis, Step::Forward);
        }
    }

    /// Move one unit backward on `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= self.ndim()`.
    pub fn step_backward(&mut self, axis: usize) {
        let p = self.position[axis] - 1;
        self.position[axis] = p;
        if p == self.grid.max(axis) {
            self.clear_out_of_bounds(axis);
        } else if p == self.before_min[axis] {
            self.mark_out_of_bounds(axis);
        }

        if self.cursor.coordinate(axis) == self.grid.min(axis) {
            self.cursor.move_to(axis, self.grid.max(axis));
        } else {
            self.cursor.step(axis, Step::Backward);
        }
    }

    /// Jump to logical coordinate `p` on `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= self.ndim()`.
    pub fn set_absolute(&mut self, axis: usize, p: i64) {
        self.position[axis] = p;
        let min = self.grid.min(axis);
        let max = self.grid.max(axis);
        if p < min {
            let q = wrap_below(p, max, self.grid.dimension(axis));
            self.cursor.move_to(axis, q);
            self.mark_out_of_bounds(axis);
        } else if p > max {
            let q = wrap_above(p, min, self.grid.dimension(axis));
            self.cursor.move_to(axis, q);
            self.mark_out_of_bounds(axis);
        } else {
            self.cursor.move_to(axis, p);
            if self.is_out_of_bounds {
                self.clear_out_of_bounds(axis);
            }
        }
    }

    /// Jump to `coords`, one axis at a time.
    ///
    /// Returns `Err(AccessError::DimensionMismatch)` without moving if
    /// `coords.len() != self.ndim()`.
    pub fn set_absolute_vector(&mut self, coords: &[i64]) -> Result<(), AccessError> {
        self.check_arity(coords.len())?;
        for (axis, &p) in coords.iter().enumerate() {
            self.set_absolute(axis, p);
        }
        Ok(())
    }

    /// Move the logical coordinate on `axis` by `delta`.
    ///
    /// Returns `Err(AccessError::CoordinateOverflow)` without moving if the
    /// target does not fit in an `i64`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= self.ndim()`.
    pub fn translate(&mut self, axis: usize, delta: i64) -> Result<(), AccessError> {
        let target = self.translated(axis, delta)?;
        self.set_absolute(axis, target);
        Ok(())
    }

    /// Move by `deltas`, one axis at a time.
    ///
    /// Returns `Err(AccessError::DimensionMismatch)` if
    /// `deltas.len() != self.ndim()` and `Err(AccessError::CoordinateOverflow)`
    /// if any target does not fit in an `i64`. Nothing moves on error.
    pub fn translate_vector(&mut self, deltas: &[i64]) -> Result<(), AccessError> {
        self.check_arity(deltas.len())?;
        let targets = deltas
            .iter()
            .enumerate()
            .map(|(axis, &delta)| self.translated(axis, delta))
            .collect::<Result<Coord, _>>()?;
        for (axis, &p) in targets.iter().enumerate() {
            self.set_absolute(axis, p);
        }
        Ok(())
    }

    fn translated(&self, axis: usize, delta: i64) -> Result<i64, AccessError> {
        let position = self.position[axis];
        position
            .checked_add(delta)
            .ok_or(AccessError::CoordinateOverflow {
                axis,
                position,
                delta,
            })
    }

    fn check_arity(&self, actual: usize) -> Result<(), AccessError> {
        if actual != self.ndim() {
            return Err(AccessError::DimensionMismatch {
                expected: self.ndim(),
                actual,
            });
        }
        Ok(())
    }

    // Entering out-of-bounds on one axis forces the aggregate.
    fn mark_out_of_bounds(&mut self, axis: usize) {
        self.axis_out_of_bounds[axis] = true;
        self.is_out_of_bounds = true;
    }

    // Leaving it requires a rescan: other axes may still be out.
    fn clear_out_of_bounds(&mut self, axis: usize) {
        self.axis_out_of_bounds[axis] = false;
        self.is_out_of_bounds = self.axis_out_of_bounds.iter().any(|&out| out);
    }
}

/// Fold `p < min` into `[min, max]`: `max - ((max - p) mod dimension)`.
pub(crate) fn wrap_below(p: i64, max: i64, dimension: i64) -> i64 {
    let r = (i128::from(max) - i128::from(p)).rem_euclid(i128::from(dimension));
    (i128::from(max) - r) as i64
}

/// Fold `p > max` into `[min, max]`: `min + ((p - min) mod dimension)`.
pub(crate) fn wrap_above(p: i64, min: i64, dimension: i64) -> i64 {
    let r = (i128::from(p) - i128::from(min)).rem_euclid(i128::from(dimension));
    (i128::from(min) + r) as i64
}

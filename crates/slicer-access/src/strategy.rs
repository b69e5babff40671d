//! The out-of-bounds strategy traits an [`ExtendedView`](crate::ExtendedView)
//! is generic over.

use crate::error::AccessError;
use crate::wrap::WrapAccessor;
use slicer_core::{BoundedGrid, BoundedSource, GridCursor};

/// A positionable accessor that is defined at every integer coordinate.
///
/// Implementors resolve samples for coordinates outside their grid by some
/// policy (wrapping, for [`WrapAccessor`]) while reporting the in-bounds
/// status of the requested coordinate itself.
pub trait OutOfBoundsAccess: Clone {
    /// The sample type read at each position.
    type Sample;

    /// Number of axes.
    fn ndim(&self) -> usize;

    /// The grid the accessor resolves samples from.
    fn grid(&self) -> &BoundedGrid;

    /// Sample at the current position.
    fn get(&self) -> Self::Sample;

    /// Requested coordinate on `axis`.
    fn position(&self, axis: usize) -> i64;

    /// Move one unit forward on `axis`.
    fn step_forward(&mut self, axis: usize);

    /// Move one unit backward on `axis`.
    fn step_backward(&mut self, axis: usize);

    /// Jump to `p` on `axis`.
    fn set_absolute(&mut self, axis: usize, p: i64);

    /// Whether the requested position is outside the grid on any axis.
    fn is_out_of_bounds(&self) -> bool;

    /// Whether the requested position is outside the grid on `axis`.
    fn is_out_of_bounds_on_axis(&self, axis: usize) -> bool;
}

/// Builds [`OutOfBoundsAccess`] values over a bounded source.
pub trait OutOfBoundsFactory<S: BoundedSource> {
    /// The accessor type produced.
    type Accessor: OutOfBoundsAccess<Sample = S::Sample>;

    /// Build an accessor over `source`.
    fn create(&self, source: &S) -> Result<Self::Accessor, AccessError>;
}

impl<C: GridCursor> OutOfBoundsAccess for WrapAccessor<C> {
    type Sample = C::Sample;

    fn ndim(&self) -> usize {
        WrapAccessor::ndim(self)
    }

    fn grid(&self) -> &BoundedGrid {
        WrapAccessor::grid(self)
    }

    fn get(&self) -> C::Sample {
        WrapAccessor::get(self)
    }

    fn position(&self, axis: usize) -> i64 {
        WrapAccessor::position(self, axis)
    }

    fn step_forward(&mut self, axis: usize) {
        WrapAccessor::step_forward(self, axis);
    }

    fn step_backward(&mut self, axis: usize) {
        WrapAccessor::step_backward(self, axis);
    }

    fn set_absolute(&mut self, axis: usize, p: i64) {
        WrapAccessor::set_absolute(self, axis, p);
    }

    fn is_out_of_bounds(&self) -> bool {
        WrapAccessor::is_out_of_bounds(self)
    }

    fn is_out_of_bounds_on_axis(&self, axis: usize) -> bool {
        WrapAccessor::is_out_of_bounds_on_axis(self, axis)
    }
}

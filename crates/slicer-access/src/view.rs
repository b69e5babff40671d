//! Binding a bounded source into a view defined at every coordinate.

use crate::error::AccessError;
use crate::factory::WrapAccessorFactory;
use crate::region::RegionSamples;
use crate::strategy::{OutOfBoundsAccess, OutOfBoundsFactory};
use slicer_core::{BoundedGrid, BoundedSource};
use std::fmt;

/// Extend `source` periodically beyond its bounds.
///
/// # Examples
///
/// ```
/// use slicer_access::{bind, ArrayGrid};
/// use slicer_core::BoundedGrid;
///
/// let grid = BoundedGrid::new(&[0], &[2]).unwrap();
/// let line = ArrayGrid::from_vec(grid, vec!['a', 'b', 'c']).unwrap();
/// let mut view = bind(line).unwrap();
///
/// assert_eq!(view.get_sample_at(&[4]).unwrap(), 'b');
/// assert!(view.is_out_of_bounds());
/// assert_eq!(view.get_sample_at(&[-1]).unwrap(), 'c');
/// assert_eq!(view.get_sample_at(&[2]).unwrap(), 'c');
/// assert!(!view.is_out_of_bounds());
/// ```
pub fn bind<S: BoundedSource>(
    source: S,
) -> Result<ExtendedView<S, WrapAccessorFactory>, AccessError> {
    bind_with(source, WrapAccessorFactory::new())
}

/// Extend `source` beyond its bounds with the accessors `factory` builds.
pub fn bind_with<S, F>(source: S, factory: F) -> Result<ExtendedView<S, F>, AccessError>
where
    S: BoundedSource,
    F: OutOfBoundsFactory<S>,
{
    ExtendedView::new(source, factory)
}

/// A bounded source viewed as if it were defined on the whole integer grid.
///
/// Sampling at any coordinate of the right dimensionality succeeds. The
/// out-of-bounds queries always describe the requested (logical) coordinate,
/// never the position the sample was actually read from.
///
/// The view owns one accessor as its own cursor. Additional independent
/// traversals come from [`random_access`](Self::random_access) or
/// [`samples`](Self::samples).
pub struct ExtendedView<S, F>
where
    S: BoundedSource,
    F: OutOfBoundsFactory<S>,
{
    source: S,
    factory: F,
    cursor: F::Accessor,
}

impl<S, F> ExtendedView<S, F>
where
    S: BoundedSource,
    F: OutOfBoundsFactory<S>,
{
    /// Bind `source` with `factory`; fails if the factory rejects the source.
    pub fn new(source: S, factory: F) -> Result<Self, AccessError> {
        let cursor = factory.create(&source)?;
        tracing::debug!(ndim = cursor.ndim(), grid = %cursor.grid(), "bound extended view");
        Ok(Self {
            source,
            factory,
            cursor,
        })
    }

    /// The underlying bounded source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The factory accessors are built with.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// The bounds of the underlying source.
    pub fn grid(&self) -> &BoundedGrid {
        self.cursor.grid()
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.cursor.ndim()
    }

    /// Move the view's cursor to `coord` and read the sample there.
    ///
    /// Returns `Err(AccessError::DimensionMismatch)` without moving if
    /// `coord.len() != self.ndim()`.
    pub fn get_sample_at(&mut self, coord: &[i64]) -> Result<S::Sample, AccessError> {
        if coord.len() != self.ndim() {
            return Err(AccessError::DimensionMismatch {
                expected: self.ndim(),
                actual: coord.len(),
            });
        }
        for (axis, &p) in coord.iter().enumerate() {
            self.cursor.set_absolute(axis, p);
        }
        Ok(self.cursor.get())
    }

    /// Sample at the cursor's current position.
    pub fn get(&self) -> S::Sample {
        self.cursor.get()
    }

    /// Cursor's logical coordinate on `axis`.
    pub fn position(&self, axis: usize) -> i64 {
        self.cursor.position(axis)
    }

    /// Move the cursor one unit forward on `axis`.
    pub fn step_forward(&mut self, axis: usize) {
        self.cursor.step_forward(axis);
    }

    /// Move the cursor one unit backward on `axis`.
    pub fn step_backward(&mut self, axis: usize) {
        self.cursor.step_backward(axis);
    }

    /// Whether the cursor's logical coordinate is outside the source bounds.
    pub fn is_out_of_bounds(&self) -> bool {
        self.cursor.is_out_of_bounds()
    }

    /// Whether the cursor's logical coordinate is outside the bounds on `axis`.
    pub fn is_out_of_bounds_on_axis(&self, axis: usize) -> bool {
        self.cursor.is_out_of_bounds_on_axis(axis)
    }

    /// A fresh accessor for an independent traversal, positioned at the
    /// grid minimum.
    pub fn random_access(&self) -> Result<F::Accessor, AccessError> {
        self.factory.create(&self.source)
    }

    /// Iterate the samples of `region` in flat order, axis 0 fastest.
    ///
    /// `region` may be larger than, overlap, or lie entirely outside the
    /// source bounds. The view's own cursor is not moved.
    pub fn samples(&self, region: &BoundedGrid) -> Result<RegionSamples<F::Accessor>, AccessError> {
        if region.ndim() != self.ndim() {
            return Err(AccessError::DimensionMismatch {
                expected: self.ndim(),
                actual: region.ndim(),
            });
        }
        tracing::debug!(%region, grid = %self.grid(), "iterating extended region");
        Ok(RegionSamples::new(self.cursor.clone(), region.clone()))
    }

    /// Iterate the samples between inclusive corners `min` and `max`.
    ///
    /// Returns `Err(AccessError::Grid)` if the corners do not form a valid
    /// interval, and `Err(AccessError::DimensionMismatch)` as for
    /// [`samples`](Self::samples).
    pub fn samples_between(
        &self,
        min: &[i64],
        max: &[i64],
    ) -> Result<RegionSamples<F::Accessor>, AccessError> {
        let region = BoundedGrid::new(min, max)?;
        self.samples(&region)
    }
}

impl<S, F> fmt::Debug for ExtendedView<S, F>
where
    S: BoundedSource,
    F: OutOfBoundsFactory<S>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position: Vec<i64> = (0..self.ndim()).map(|d| self.position(d)).collect();
        f.debug_struct("ExtendedView")
            .field("grid", self.grid())
            .field("position", &position)
            .field("out_of_bounds", &self.is_out_of_bounds())
            .finish_non_exhaustive()
    }
}

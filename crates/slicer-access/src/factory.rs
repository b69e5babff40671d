//! Construction of wrap accessors from arbitrary bounded sources.

use crate::config::FactoryConfig;
use crate::error::AccessError;
use crate::strategy::OutOfBoundsFactory;
use crate::wrap::WrapAccessor;
use slicer_core::{BoundedSource, GridCursor};

/// Builds a [`WrapAccessor`] over any [`BoundedSource`].
///
/// # Examples
///
/// ```
/// use slicer_access::{ArrayGrid, WrapAccessorFactory};
/// use slicer_core::BoundedGrid;
///
/// let grid = BoundedGrid::from_dimensions(&[4, 4, 4]).unwrap();
/// let volume = ArrayGrid::from_vec(grid, vec![0.5f32; 64]).unwrap();
///
/// let mut acc = WrapAccessorFactory::new().create(&volume).unwrap();
/// acc.set_absolute_vector(&[-1, 9, 4]).unwrap();
/// assert_eq!(acc.wrapped_coord().as_slice(), &[3, 1, 0]);
/// assert_eq!(acc.get(), 0.5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WrapAccessorFactory {
    config: FactoryConfig,
}

impl WrapAccessorFactory {
    /// Create a factory with the default [`FactoryConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory with an explicit config.
    pub fn with_config(config: FactoryConfig) -> Self {
        Self { config }
    }

    /// The factory's configuration.
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Build an accessor over `source`.
    ///
    /// Returns `Err(AccessError::UnsupportedSource)` if the source cannot
    /// report bounds or cannot produce a cursor,
    /// `Err(AccessError::DimensionMismatch)` if the source, its bounds and
    /// its cursor disagree on the number of axes, and
    /// `Err(AccessError::InvalidConfig)` if the config does not fit the source.
    pub fn create<S: BoundedSource>(
        &self,
        source: &S,
    ) -> Result<WrapAccessor<S::Cursor>, AccessError> {
        let grid = source
            .bounds()
            .ok_or_else(|| unsupported("source does not report min/max bounds"))?;
        let cursor = source
            .cursor()
            .ok_or_else(|| unsupported("source cannot produce a random-access cursor"))?;
        if source.ndim() != grid.ndim() || cursor.ndim() != grid.ndim() {
            let actual = if source.ndim() != grid.ndim() {
                source.ndim()
            } else {
                cursor.ndim()
            };
            tracing::warn!(
                expected = grid.ndim(),
                actual,
                "source dimensionality disagrees with its bounds"
            );
            return Err(AccessError::DimensionMismatch {
                expected: grid.ndim(),
                actual,
            });
        }
        self.config.validate(grid.ndim()).inspect_err(|e| {
            tracing::warn!(error = %e, "factory config rejected source");
        })?;

        tracing::debug!(ndim = grid.ndim(), %grid, "created wrap accessor");
        WrapAccessor::new(grid, cursor)
    }
}

impl<S: BoundedSource> OutOfBoundsFactory<S> for WrapAccessorFactory {
    type Accessor = WrapAccessor<S::Cursor>;

    fn create(&self, source: &S) -> Result<Self::Accessor, AccessError> {
        WrapAccessorFactory::create(self, source)
    }
}

fn unsupported(reason: &str) -> AccessError {
    tracing::warn!(reason, "rejected unsupported source");
    AccessError::UnsupportedSource {
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slicer_test_utils::{
        init_tracing, BoundlessSource, CoordSource, CursorlessSource, MisreportingSource,
        SkewedSource,
    };

    #[test]
    fn create_positions_at_grid_min() {
        init_tracing();
        let source = CoordSource::new(&[3, -2], &[6, 2]);
        let acc = WrapAccessorFactory::new().create(&source).unwrap();
        assert_eq!(acc.localize(), &[3, -2]);
        assert_eq!(acc.wrapped_coord().as_slice(), &[3, -2]);
        assert!(!acc.is_out_of_bounds());
        assert_eq!(acc.grid(), source.grid());
    }

    #[test]
    fn source_without_bounds_is_unsupported() {
        init_tracing();
        match WrapAccessorFactory::new().create(&BoundlessSource::new(2)) {
            Err(AccessError::UnsupportedSource { reason }) => {
                assert!(reason.contains("bounds"), "reason: {reason}");
            }
            other => panic!("expected UnsupportedSource, got {other:?}"),
        }
    }

    #[test]
    fn source_without_cursor_is_unsupported() {
        init_tracing();
        let source = CursorlessSource::new(&[0, 0], &[3, 3]);
        match WrapAccessorFactory::new().create(&source) {
            Err(AccessError::UnsupportedSource { reason }) => {
                assert!(reason.contains("cursor"), "reason: {reason}");
            }
            other => panic!("expected UnsupportedSource, got {other:?}"),
        }
    }

    #[test]
    fn skewed_cursor_is_dimension_mismatch() {
        let source = SkewedSource::new(&[0, 0, 0], &[3, 3, 3], 2);
        assert_eq!(
            WrapAccessorFactory::new().create(&source).unwrap_err(),
            AccessError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn source_ndim_disagreeing_with_bounds_is_dimension_mismatch() {
        init_tracing();
        let source = MisreportingSource::new(&[0, 0], &[3, 3], 4);
        assert_eq!(
            WrapAccessorFactory::new().create(&source).unwrap_err(),
            AccessError::DimensionMismatch {
                expected: 2,
                actual: 4
            }
        );
    }

    #[test]
    fn config_is_checked_against_source() {
        let source = CoordSource::new(&[0, 0], &[3, 3]);
        let factory = WrapAccessorFactory::with_config(FactoryConfig {
            slice_axes: (0, 2),
            ..FactoryConfig::default()
        });
        assert!(matches!(
            factory.create(&source),
            Err(AccessError::InvalidConfig { .. })
        ));

        let factory = WrapAccessorFactory::with_config(FactoryConfig {
            slice_axes: (1, 0),
            expected_ndim: Some(2),
        });
        assert!(factory.create(&source).is_ok());
        assert_eq!(factory.config().slice_axes, (1, 0));
    }

    #[test]
    fn slice_axes_do_not_change_wrapping() {
        let source = CoordSource::new(&[0, 0, 0], &[4, 5, 6]);
        let mut a = WrapAccessorFactory::new().create(&source).unwrap();
        let mut b = WrapAccessorFactory::with_config(FactoryConfig {
            slice_axes: (2, 1),
            ..FactoryConfig::default()
        })
        .create(&source)
        .unwrap();
        for coords in [[-7, 13, 2], [5, -1, 99], [0, 0, -700]] {
            a.set_absolute_vector(&coords).unwrap();
            b.set_absolute_vector(&coords).unwrap();
            assert_eq!(a.wrapped_coord(), b.wrapped_coord());
            assert_eq!(a.is_out_of_bounds(), b.is_out_of_bounds());
        }
    }

    #[test]
    fn created_accessors_are_independent() {
        let source = CoordSource::new(&[0], &[9]);
        let factory = WrapAccessorFactory::new();
        let mut a = factory.create(&source).unwrap();
        let b = factory.create(&source).unwrap();
        a.set_absolute(0, 42);
        assert_eq!(b.position(0), 0);
        assert!(!b.is_out_of_bounds());
    }
}

//! Factory configuration parameters.

use crate::error::AccessError;

/// Configuration for [`WrapAccessorFactory`](crate::WrapAccessorFactory).
///
/// Validated against the source at accessor creation; immutable after.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactoryConfig {
    /// The pair of axes a slicing consumer displays.
    ///
    /// Carried for consumers that route slices through the factory. The
    /// wrap algorithm treats every axis identically and never reads this.
    /// Only validated when the source has at least two axes.
    ///
    /// Default: `(0, 1)`.
    pub slice_axes: (usize, usize),

    /// Reject sources whose dimensionality differs from this value.
    ///
    /// Default: `None` (accept any dimensionality).
    pub expected_ndim: Option<usize>,
}

impl FactoryConfig {
    /// Default displayed axis pair.
    pub const DEFAULT_SLICE_AXES: (usize, usize) = (0, 1);

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            slice_axes: Self::DEFAULT_SLICE_AXES,
            expected_ndim: None,
        }
    }

    /// Check the config against a source with `ndim` axes.
    pub fn validate(&self, ndim: usize) -> Result<(), AccessError> {
        if let Some(expected) = self.expected_ndim {
            if expected != ndim {
                return Err(AccessError::DimensionMismatch {
                    expected,
                    actual: ndim,
                });
            }
        }
        if ndim >= 2 {
            let (a, b) = self.slice_axes;
            if a >= ndim || b >= ndim {
                return Err(AccessError::InvalidConfig {
                    reason: format!("slice axes ({a}, {b}) out of range for {ndim} axes"),
                });
            }
            if a == b {
                return Err(AccessError::InvalidConfig {
                    reason: format!("slice axes must be distinct, got ({a}, {b})"),
                });
            }
        }
        Ok(())
    }
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self::new()
    }
}

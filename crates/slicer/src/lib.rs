//! Slicer: toroidal out-of-bounds access for bounded N-dimensional grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Slicer sub-crates. For most users, adding `slicer` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use slicer::prelude::*;
//!
//! // A 3x2 image, row-major with x (axis 0) fastest.
//! let grid = BoundedGrid::new(&[0, 0], &[2, 1]).unwrap();
//! let image = ArrayGrid::from_vec(grid, vec![1, 2, 3, 4, 5, 6]).unwrap();
//!
//! // Read it as if it tiled the whole plane.
//! let mut view = bind(image).unwrap();
//! assert_eq!(view.get_sample_at(&[-1, -1]).unwrap(), 6);
//! assert!(view.is_out_of_bounds());
//! assert!(view.is_out_of_bounds_on_axis(0));
//!
//! view.step_forward(0);
//! assert_eq!(view.get(), 4);
//! assert!(!view.is_out_of_bounds_on_axis(0));
//! assert!(view.is_out_of_bounds());
//!
//! // Or hand out an independent accessor.
//! let mut acc = view.random_access().unwrap();
//! acc.set_absolute_vector(&[7, 3]).unwrap();
//! assert_eq!(acc.wrapped_coord().as_slice(), &[1, 1]);
//! assert_eq!(acc.get(), 5);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `slicer-core` | `BoundedGrid`, coordinates, source and cursor traits |
//! | [`access`] | `slicer-access` | Wrap accessor, factory, extended views, array store |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid intervals, coordinates, and the source/cursor traits (`slicer-core`).
pub use slicer_core as grid;

/// Wraparound accessors and views (`slicer-access`).
///
/// [`access::WrapAccessor`] is the accessor itself, built by
/// [`access::WrapAccessorFactory`] or through [`access::bind`].
pub use slicer_access as access;

/// Common imports for typical Slicer usage.
///
/// ```rust
/// use slicer::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use slicer_core::{BoundedGrid, BoundedSource, Coord, GridCursor, Step};

    // Errors
    pub use slicer_core::GridError;
    pub use slicer_access::AccessError;

    // Access
    pub use slicer_access::{
        bind, bind_with, ArrayGrid, AxisState, ExtendedView, FactoryConfig, OutOfBoundsAccess,
        OutOfBoundsFactory, WrapAccessor, WrapAccessorFactory,
    };
}

//! Core types and traits for the Slicer wraparound accessor.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the coordinate type, the immutable [`BoundedGrid`] interval, grid
//! construction errors, and the [`BoundedSource`] / [`GridCursor`] traits
//! through which backing sample stores plug into the accessor.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod id;
pub mod traits;

pub use error::GridError;
pub use grid::BoundedGrid;
pub use id::Coord;
pub use traits::{BoundedSource, GridCursor, Step};

//! Wraparound random access for bounded N-dimensional grids.
//!
//! A [`WrapAccessor`] walks a bounded grid with coordinates that may lie
//! arbitrarily far outside it. Samples are always read from the position
//! folded back into the grid (toroidal addressing), while the accessor
//! reports exactly whether the requested, unwrapped coordinate is out of
//! bounds, per axis and in aggregate.
//!
//! # Building blocks
//!
//! - [`WrapAccessor`]: the accessor itself; O(1) single steps, one modulo per absolute jump
//! - [`WrapAccessorFactory`]: builds accessors over any [`BoundedSource`](slicer_core::BoundedSource)
//! - [`bind`] / [`ExtendedView`]: a source viewed as defined everywhere
//! - [`ArrayGrid`]: a dense in-memory source
//!
//! # Threading
//!
//! Accessors are not shared between threads. Clone one per traversal; the
//! clones share only the read-only backing buffer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
pub mod factory;
pub mod region;
pub mod strategy;
pub mod view;
pub mod wrap;

#[cfg(test)]
pub(crate) mod compliance;

pub use array::{ArrayCursor, ArrayGrid};
pub use config::FactoryConfig;
pub use error::AccessError;
pub use factory::WrapAccessorFactory;
pub use region::RegionSamples;
pub use strategy::{OutOfBoundsAccess, OutOfBoundsFactory};
pub use view::{bind, bind_with, ExtendedView};
pub use wrap::{AxisState, WrapAccessor};

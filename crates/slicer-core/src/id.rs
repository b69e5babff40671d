//! The [`Coord`] type alias.

use smallvec::SmallVec;

/// A coordinate on an integer grid.
///
/// Uses `SmallVec<[i64; 4]>` to avoid heap allocation for grids up to
/// 4 dimensions, which covers volumes and time-lapse volumes.
/// Higher-dimensional grids spill to the heap transparently.
pub type Coord = SmallVec<[i64; 4]>;

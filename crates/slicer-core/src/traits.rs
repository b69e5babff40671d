//! Source and cursor traits consumed by the wraparound accessor.

use crate::grid::BoundedGrid;

/// Direction of a single-unit cursor move along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Increase the coordinate by one.
    Forward,
    /// Decrease the coordinate by one.
    Backward,
}

impl Step {
    /// Signed unit offset of this step (`+1` or `-1`).
    pub fn delta(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// A random-access cursor into a bounded sample store.
///
/// The cursor is only ever positioned inside the bounds of the source that
/// produced it. Callers that need to walk outside those bounds wrap the
/// cursor in an out-of-bounds accessor which keeps the cursor folded back
/// into the interval.
///
/// `Clone` must produce an independent cursor: moving the clone never moves
/// the original.
pub trait GridCursor: Clone {
    /// The sample type read at each grid cell.
    type Sample;

    /// Number of axes the cursor moves along.
    fn ndim(&self) -> usize;

    /// Read the sample at the current position.
    fn get_sample(&self) -> Self::Sample;

    /// Current coordinate on `axis`.
    fn coordinate(&self, axis: usize) -> i64;

    /// Move to `value` on `axis`, leaving other axes untouched.
    fn move_to(&mut self, axis: usize, value: i64);

    /// Move one unit along `axis`.
    fn step(&mut self, axis: usize, step: Step);
}

/// A bounded, randomly accessible sample store.
///
/// Sources are read-only from the accessor's point of view. A source that
/// is shared between traversal threads must tolerate concurrent reads
/// through independent cursors.
pub trait BoundedSource {
    /// The sample type read at each grid cell.
    type Sample;

    /// The cursor type handed out by [`cursor`](Self::cursor).
    type Cursor: GridCursor<Sample = Self::Sample>;

    /// Number of axes.
    fn ndim(&self) -> usize;

    /// The interval the source is defined on.
    ///
    /// Returns `None` if the source cannot report finite bounds.
    fn bounds(&self) -> Option<BoundedGrid>;

    /// A fresh cursor positioned at the grid minimum.
    ///
    /// Returns `None` if the source cannot hand out an independent cursor.
    fn cursor(&self) -> Option<Self::Cursor>;
}

//! Mock bounded sources.
//!
//! - [`CoordSource`] reads back the coordinate of each cell and counts how
//!   its cursor is driven.
//! - [`BoundlessSource`] cannot report bounds.
//! - [`CursorlessSource`] reports bounds but cannot hand out a cursor.
//! - [`SkewedSource`] hands out a cursor with the wrong number of axes.
//! - [`MisreportingSource`] claims a different number of axes than its bounds have.

use slicer_core::{BoundedGrid, BoundedSource, Coord, GridCursor, Step};

/// A source whose sample at every cell is that cell's coordinate.
///
/// Panics on construction if `min`/`max` do not form a valid grid.
#[derive(Clone, Debug)]
pub struct CoordSource {
    grid: BoundedGrid,
}

impl CoordSource {
    pub fn new(min: &[i64], max: &[i64]) -> Self {
        let grid = BoundedGrid::new(min, max)
            .unwrap_or_else(|e| panic!("invalid CoordSource grid: {e}"));
        Self { grid }
    }

    pub fn grid(&self) -> &BoundedGrid {
        &self.grid
    }
}

impl BoundedSource for CoordSource {
    type Sample = Coord;
    type Cursor = CoordCursor;

    fn ndim(&self) -> usize {
        self.grid.ndim()
    }

    fn bounds(&self) -> Option<BoundedGrid> {
        Some(self.grid.clone())
    }

    fn cursor(&self) -> Option<CoordCursor> {
        Some(CoordCursor::new(self.grid.clone()))
    }
}

/// Cursor over a [`CoordSource`].
///
/// Panics if it is ever driven outside its grid, so any test using it also
/// checks that the accessor keeps its delegate in bounds. Counts absolute
/// moves and unit steps separately.
#[derive(Clone, Debug)]
pub struct CoordCursor {
    grid: BoundedGrid,
    position: Coord,
    moves: usize,
    steps: usize,
}

impl CoordCursor {
    fn new(grid: BoundedGrid) -> Self {
        Self {
            position: Coord::from_slice(grid.mins()),
            grid,
            moves: 0,
            steps: 0,
        }
    }

    /// Number of `move_to` calls so far.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Number of `step` calls so far.
    pub fn step_count(&self) -> usize {
        self.steps
    }

    fn check(&self, axis: usize) {
        let p = self.position[axis];
        assert!(
            self.grid.min(axis) <= p && p <= self.grid.max(axis),
            "CoordCursor driven to {p} on axis {axis}, outside {}",
            self.grid
        );
    }
}

impl GridCursor for CoordCursor {
    type Sample = Coord;

    fn ndim(&self) -> usize {
        self.position.len()
    }

    fn get_sample(&self) -> Coord {
        self.position.clone()
    }

    fn coordinate(&self, axis: usize) -> i64 {
        self.position[axis]
    }

    fn move_to(&mut self, axis: usize, value: i64) {
        self.position[axis] = value;
        self.moves += 1;
        self.check(axis);
    }

    fn step(&mut self, axis: usize, step: Step) {
        self.position[axis] += step.delta();
        self.steps += 1;
        self.check(axis);
    }
}

/// A source that cannot report its bounds.
#[derive(Clone, Debug)]
pub struct BoundlessSource {
    ndim: usize,
}

impl BoundlessSource {
    pub fn new(ndim: usize) -> Self {
        Self { ndim }
    }
}

impl BoundedSource for BoundlessSource {
    type Sample = Coord;
    type Cursor = CoordCursor;

    fn ndim(&self) -> usize {
        self.ndim
    }

    fn bounds(&self) -> Option<BoundedGrid> {
        None
    }

    fn cursor(&self) -> Option<CoordCursor> {
        None
    }
}

/// A source with bounds but no cursor.
#[derive(Clone, Debug)]
pub struct CursorlessSource {
    inner: CoordSource,
}

impl CursorlessSource {
    pub fn new(min: &[i64], max: &[i64]) -> Self {
        Self {
            inner: CoordSource::new(min, max),
        }
    }
}

impl BoundedSource for CursorlessSource {
    type Sample = Coord;
    type Cursor = CoordCursor;

    fn ndim(&self) -> usize {
        self.inner.ndim()
    }

    fn bounds(&self) -> Option<BoundedGrid> {
        self.inner.bounds()
    }

    fn cursor(&self) -> Option<CoordCursor> {
        None
    }
}

/// A source whose cursor covers only the first `cursor_ndim` axes of its
/// bounds.
#[derive(Clone, Debug)]
pub struct SkewedSource {
    inner: CoordSource,
    cursor_ndim: usize,
}

impl SkewedSource {
    pub fn new(min: &[i64], max: &[i64], cursor_ndim: usize) -> Self {
        Self {
            inner: CoordSource::new(min, max),
            cursor_ndim,
        }
    }
}

impl BoundedSource for SkewedSource {
    type Sample = Coord;
    type Cursor = CoordCursor;

    fn ndim(&self) -> usize {
        self.inner.ndim()
    }

    fn bounds(&self) -> Option<BoundedGrid> {
        self.inner.bounds()
    }

    fn cursor(&self) -> Option<CoordCursor> {
        let n = self.cursor_ndim.min(self.inner.ndim());
        let grid = self.inner.grid();
        let truncated = BoundedGrid::new(&grid.mins()[..n], &grid.maxs()[..n]).ok()?;
        Some(CoordCursor::new(truncated))
    }
}

/// A source whose `ndim()` disagrees with its own bounds and cursor.
#[derive(Clone, Debug)]
pub struct MisreportingSource {
    inner: CoordSource,
    claimed_ndim: usize,
}

impl MisreportingSource {
    pub fn new(min: &[i64], max: &[i64], claimed_ndim: usize) -> Self {
        Self {
            inner: CoordSource::new(min, max),
            claimed_ndim,
        }
    }
}

impl BoundedSource for MisreportingSource {
    type Sample = Coord;
    type Cursor = CoordCursor;

    fn ndim(&self) -> usize {
        self.claimed_ndim
    }

    fn bounds(&self) -> Option<BoundedGrid> {
        self.inner.bounds()
    }

    fn cursor(&self) -> Option<CoordCursor> {
        self.inner.cursor()
    }
}

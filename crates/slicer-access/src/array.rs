//! In-memory bounded sample store.

use slicer_core::{BoundedGrid, BoundedSource, Coord, GridCursor, GridError, Step};
use smallvec::SmallVec;
use std::sync::Arc;

type Strides = SmallVec<[usize; 4]>;

/// A dense sample buffer laid out over a [`BoundedGrid`].
///
/// Samples are stored in flat order with axis 0 varying fastest. The buffer
/// is shared and read-only, so cursors from one grid can be moved to other
/// threads whenever `T: Send + Sync`.
///
/// # Examples
///
/// ```
/// use slicer_access::ArrayGrid;
/// use slicer_core::BoundedGrid;
///
/// let grid = BoundedGrid::new(&[1, 1], &[3, 2]).unwrap();
/// let img = ArrayGrid::from_vec(grid, vec![1u8, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(img.get(&[1, 1]), Some(&1));
/// assert_eq!(img.get(&[3, 1]), Some(&3));
/// assert_eq!(img.get(&[1, 2]), Some(&4));
/// assert_eq!(img.get(&[4, 1]), None);
/// ```
#[derive(Debug)]
pub struct ArrayGrid<T> {
    grid: BoundedGrid,
    strides: Strides,
    data: Arc<[T]>,
}

impl<T> Clone for ArrayGrid<T> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid.clone(),
            strides: self.strides.clone(),
            data: Arc::clone(&self.data),
        }
    }
}

impl<T> ArrayGrid<T> {
    /// Wrap an existing buffer holding one sample per grid cell.
    ///
    /// Returns `Err(GridError::SizeMismatch)` if `data.len()` differs from
    /// the grid's cell count and `Err(GridError::CellCountOverflow)` if the
    /// cell count does not fit in a `usize`.
    pub fn from_vec(grid: BoundedGrid, data: Vec<T>) -> Result<Self, GridError> {
        let (strides, cells) = flat_strides(&grid).ok_or(GridError::CellCountOverflow)?;
        if data.len() != cells {
            return Err(GridError::SizeMismatch {
                expected: cells,
                actual: data.len(),
            });
        }
        Ok(Self {
            grid,
            strides,
            data: data.into(),
        })
    }

    /// Fill a buffer by evaluating `f` at every grid coordinate.
    ///
    /// Returns `Err(GridError::CellCountOverflow)` without calling `f` if
    /// the grid is too large to address.
    pub fn from_fn(grid: BoundedGrid, mut f: impl FnMut(&[i64]) -> T) -> Result<Self, GridError> {
        let (_, cells) = flat_strides(&grid).ok_or(GridError::CellCountOverflow)?;
        let mut data = Vec::with_capacity(cells);
        let mut coord = Coord::from_slice(grid.mins());
        for _ in 0..cells {
            data.push(f(coord.as_slice()));
            // Odometer increment, axis 0 fastest.
            for d in 0..grid.ndim() {
                if coord[d] < grid.max(d) {
                    coord[d] += 1;
                    break;
                }
                coord[d] = grid.min(d);
            }
        }
        Self::from_vec(grid, data)
    }

    /// The interval the samples cover.
    pub fn grid(&self) -> &BoundedGrid {
        &self.grid
    }

    /// All samples in flat order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Sample at `coord`, or `None` outside the grid.
    pub fn get(&self, coord: &[i64]) -> Option<&T> {
        if !self.grid.contains(coord) {
            return None;
        }
        let offset: usize = coord
            .iter()
            .enumerate()
            .map(|(d, &p)| (p - self.grid.min(d)) as usize * self.strides[d])
            .sum();
        self.data.get(offset)
    }
}

impl<T: Clone> BoundedSource for ArrayGrid<T> {
    type Sample = T;
    type Cursor = ArrayCursor<T>;

    fn ndim(&self) -> usize {
        self.grid.ndim()
    }

    fn bounds(&self) -> Option<BoundedGrid> {
        Some(self.grid.clone())
    }

    fn cursor(&self) -> Option<ArrayCursor<T>> {
        Some(ArrayCursor {
            data: Arc::clone(&self.data),
            grid: self.grid.clone(),
            strides: self.strides.clone(),
            position: Coord::from_slice(self.grid.mins()),
            offset: 0,
        })
    }
}

/// Cursor into an [`ArrayGrid`].
///
/// Tracks its flat buffer offset incrementally: a step adds or subtracts one
/// stride, a move shifts by the coordinate delta times the stride.
#[derive(Debug)]
pub struct ArrayCursor<T> {
    data: Arc<[T]>,
    grid: BoundedGrid,
    strides: Strides,
    position: Coord,
    offset: usize,
}

impl<T> Clone for ArrayCursor<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            grid: self.grid.clone(),
            strides: self.strides.clone(),
            position: self.position.clone(),
            offset: self.offset,
        }
    }
}

impl<T> ArrayCursor<T> {
    /// Flat buffer offset of the current position.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<T: Clone> GridCursor for ArrayCursor<T> {
    type Sample = T;

    fn ndim(&self) -> usize {
        self.position.len()
    }

    fn get_sample(&self) -> T {
        self.data[self.offset].clone()
    }

    fn coordinate(&self, axis: usize) -> i64 {
        self.position[axis]
    }

    fn move_to(&mut self, axis: usize, value: i64) {
        debug_assert!(
            self.grid.min(axis) <= value && value <= self.grid.max(axis),
            "cursor moved to {value} outside axis {axis} of {}",
            self.grid
        );
        let min = self.grid.min(axis);
        let stride = self.strides[axis];
        let from = (self.position[axis] - min) as usize * stride;
        let to = (value - min) as usize * stride;
        self.offset = self.offset - from + to;
        self.position[axis] = value;
    }

    fn step(&mut self, axis: usize, step: Step) {
        let stride = self.strides[axis];
        match step {
            Step::Forward => self.offset += stride,
            Step::Backward => self.offset -= stride,
        }
        self.position[axis] += step.delta();
        debug_assert!(
            self.grid.contains(&self.position),
            "cursor stepped outside axis {axis} of {}",
            self.grid
        );
    }
}

/// Per-axis strides (axis 0 fastest) and total cell count, or `None` if
/// the buffer would not be addressable.
fn flat_strides(grid: &BoundedGrid) -> Option<(Strides, usize)> {
    let mut strides = Strides::with_capacity(grid.ndim());
    let mut cells = 1usize;
    for &n in grid.dimensions() {
        strides.push(cells);
        cells = cells.checked_mul(usize::try_from(n).ok()?)?;
    }
    Some((strides, cells))
}

//! Benchmark fixtures for the Slicer wraparound accessor.
//!
//! - [`reference_volume`]: a 64x64x64 `f32` volume (262K cells)
//! - [`stress_volume`]: a 2048x2048 `f32` plane (~4M cells)
//! - [`probe_coords`]: deterministic coordinates scattered well outside a grid

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use slicer_access::ArrayGrid;
use slicer_core::{BoundedGrid, Coord};

/// Build the reference volume: 64 cells per axis, values ramp with the flat index.
pub fn reference_volume() -> ArrayGrid<f32> {
    ramp(&[64, 64, 64])
}

/// Build the stress plane: 2048x2048 cells.
///
/// Same layout as [`reference_volume`] at 16x the cell count, in 2D.
pub fn stress_volume() -> ArrayGrid<f32> {
    ramp(&[2048, 2048])
}

fn ramp(dimensions: &[i64]) -> ArrayGrid<f32> {
    let grid = BoundedGrid::from_dimensions(dimensions).unwrap();
    let mut i = 0u32;
    ArrayGrid::from_fn(grid, |_| {
        i = i.wrapping_add(1);
        i as f32
    })
    .unwrap()
}

/// Generate `n` deterministic coordinates within `span` periods of `grid`
/// on every axis, so most of them lie out of bounds.
pub fn probe_coords(grid: &BoundedGrid, n: usize, span: i64, seed: u64) -> Vec<Coord> {
    let mut state = seed;
    let mut coords = Vec::with_capacity(n);
    for _ in 0..n {
        let mut c = Coord::with_capacity(grid.ndim());
        for d in 0..grid.ndim() {
            // Knuth MMIX LCG.
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let width = (2 * span + 1) * grid.dimension(d);
            let offset = ((state >> 33) % width as u64) as i64;
            c.push(grid.min(d) - span * grid.dimension(d) + offset);
        }
        coords.push(c);
    }
    coords
}

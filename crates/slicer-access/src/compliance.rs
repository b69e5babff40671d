//! Wrap accessor compliance test helpers.
//!
//! These functions check the invariants every accessor must hold no matter
//! which cursor backs it. Reused by the accessor, view, and array test
//! modules.

use crate::wrap::WrapAccessor;
use indexmap::IndexSet;
use slicer_core::GridCursor;

/// Assert that the aggregate flag equals the OR of the per-axis flags.
pub fn assert_aggregate_consistent<C: GridCursor>(acc: &WrapAccessor<C>) {
    let any = (0..acc.ndim()).any(|d| acc.is_out_of_bounds_on_axis(d));
    assert_eq!(
        acc.is_out_of_bounds(),
        any,
        "aggregate flag {} disagrees with axis flags at {:?}",
        acc.is_out_of_bounds(),
        acc.localize()
    );
}

/// Assert that each axis flag matches a direct bounds check of the logical position.
pub fn assert_flags_match_position<C: GridCursor>(acc: &WrapAccessor<C>) {
    let grid = acc.grid();
    for d in 0..acc.ndim() {
        let p = acc.position(d);
        let outside = p < grid.min(d) || p > grid.max(d);
        assert_eq!(
            acc.is_out_of_bounds_on_axis(d),
            outside,
            "axis {d} flag wrong for logical position {p} in {grid}"
        );
    }
    assert_aggregate_consistent(acc);
}

/// Assert that the wrapped coordinate is inside the grid and congruent to
/// the logical coordinate on every axis.
pub fn assert_wrapped_congruent<C: GridCursor>(acc: &WrapAccessor<C>) {
    let grid = acc.grid();
    let wrapped = acc.wrapped_coord();
    assert!(
        grid.contains(&wrapped),
        "wrapped {wrapped:?} escaped {grid}"
    );
    for d in 0..acc.ndim() {
        let diff = i128::from(acc.position(d)) - i128::from(wrapped[d]);
        assert_eq!(
            diff.rem_euclid(i128::from(grid.dimension(d))),
            0,
            "axis {d}: logical {} and wrapped {} are not congruent",
            acc.position(d),
            wrapped[d]
        );
    }
}

/// Assert that any window of one period along `axis` visits every wrapped
/// coordinate exactly once, starting at `origin`.
pub fn assert_period_is_bijective<C: GridCursor>(
    template: &WrapAccessor<C>,
    axis: usize,
    origin: i64,
) {
    let dim = template.grid().dimension(axis);
    let mut acc = template.clone();
    let mut seen = IndexSet::new();
    for p in origin..origin + dim {
        acc.set_absolute(axis, p);
        seen.insert(acc.wrapped_position(axis));
    }
    assert_eq!(
        seen.len() as i64,
        dim,
        "period starting at {origin} on axis {axis} revisits cells: {seen:?}"
    );
}

/// Walk `span` cells beyond both edges of every axis by single steps and
/// check all invariants after each step.
pub fn assert_step_walk_consistent<C: GridCursor>(template: &WrapAccessor<C>, span: i64) {
    for d in 0..template.ndim() {
        let grid = template.grid();
        let mut acc = template.clone();
        acc.set_absolute(d, grid.min(d) - span);
        assert_flags_match_position(&acc);
        while acc.position(d) < grid.max(d) + span {
            acc.step_forward(d);
            assert_flags_match_position(&acc);
            assert_wrapped_congruent(&acc);
        }
        while acc.position(d) > grid.min(d) - span {
            acc.step_backward(d);
            assert_flags_match_position(&acc);
            assert_wrapped_congruent(&acc);
        }
    }
}

/// Run all compliance checks on an accessor.
pub fn run_full_compliance<C: GridCursor>(template: &WrapAccessor<C>) {
    assert_aggregate_consistent(template);
    assert_flags_match_position(template);
    assert_wrapped_congruent(template);
    for d in 0..template.ndim() {
        let grid = template.grid();
        let dim = grid.dimension(d);
        for origin in [grid.min(d), grid.min(d) - 3 * dim - 1, grid.max(d) + 2 * dim + 1] {
            assert_period_is_bijective(template, d, origin);
        }
    }
    let widest = template
        .grid()
        .dimensions()
        .iter()
        .copied()
        .max()
        .unwrap_or(1);
    assert_step_walk_consistent(template, 2 * widest);
}

//! Flat-order traversal of an arbitrary interval through an out-of-bounds accessor.

use crate::strategy::OutOfBoundsAccess;
use slicer_core::BoundedGrid;

/// Iterator over the samples of a region, axis 0 fastest.
///
/// Built by [`ExtendedView::samples`](crate::ExtendedView::samples). The
/// region need not overlap the source: every coordinate is resolved by the
/// accessor's out-of-bounds policy. Advancing steps axis 0 by one unit;
/// an axis that reaches the region's upper bound is reset with a single
/// absolute jump and the carry moves to the next axis.
#[derive(Clone, Debug)]
pub struct RegionSamples<A> {
    acc: A,
    region: BoundedGrid,
    remaining: Option<u64>,
    done: bool,
}

impl<A: OutOfBoundsAccess> RegionSamples<A> {
    pub(crate) fn new(mut acc: A, region: BoundedGrid) -> Self {
        for (axis, &p) in region.mins().iter().enumerate() {
            acc.set_absolute(axis, p);
        }
        Self {
            acc,
            remaining: region.cell_count(),
            region,
            done: false,
        }
    }

    /// The region being traversed.
    pub fn region(&self) -> &BoundedGrid {
        &self.region
    }

    /// The accessor positioned at the next sample to be yielded.
    pub fn accessor(&self) -> &A {
        &self.acc
    }

    fn advance(&mut self) {
        for axis in 0..self.region.ndim() {
            if self.acc.position(axis) < self.region.max(axis) {
                self.acc.step_forward(axis);
                return;
            }
            self.acc.set_absolute(axis, self.region.min(axis));
        }
        self.done = true;
    }
}

impl<A: OutOfBoundsAccess> Iterator for RegionSamples<A> {
    type Item = A::Sample;

    fn next(&mut self) -> Option<A::Sample> {
        if self.done {
            return None;
        }
        let sample = self.acc.get();
        self.remaining = self.remaining.map(|n| n.saturating_sub(1));
        self.advance();
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.remaining.map(usize::try_from) {
            Some(Ok(n)) => (n, Some(n)),
            _ => (usize::MAX, None),
        }
    }
}

//! Test utilities and mock sources for Slicer development.
//!
//! Provides [`CoordSource`], a bounded source whose samples are their own
//! coordinates, plus deliberately broken sources ([`BoundlessSource`],
//! [`CursorlessSource`], [`SkewedSource`], [`MisreportingSource`]) for
//! exercising factory error paths. [`init_tracing`] routes `tracing` output through the test harness.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    BoundlessSource, CoordCursor, CoordSource, CursorlessSource, MisreportingSource, SkewedSource,
};

use tracing_subscriber::filter::LevelFilter;

/// Install a debug-level subscriber writing through the test harness.
///
/// Safe to call from every test; only the first call in a process installs
/// the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}

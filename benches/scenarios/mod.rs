//! Real-world scenario benchmarks.
//!
//! These render the Drift voice the way the drift binary does, block by block.

mod drift;

pub use drift::bench_drift;

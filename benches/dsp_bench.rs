//! Benchmarks for the per-sample primitives and a full voice.
//!
//! Run with: cargo bench
//!
//! Reference timing at 48kHz sample rate:
//!   - 64 samples  = 1.33ms deadline
//!   - 128 samples = 2.67ms deadline
//!   - 256 samples = 5.33ms deadline
//!   - 512 samples = 10.67ms deadline
//!
//! Benchmark groups:
//!   - dsp/*        Individual primitives (fader, smoother, randomizer, math)
//!   - scenarios/*  The Drift voice rendering whole blocks

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

criterion_group!(
    benches,
    dsp::bench_fader,
    dsp::bench_smoother,
    dsp::bench_randomizer,
    dsp::bench_math,
    scenarios::bench_drift,
);
criterion_main!(benches);

//! Benchmarks for the math helpers that run per sample.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ramp_dsp::dsp::math::{db_to_linear, ring_interp_linear, wrap};

use crate::BLOCK_SIZES;

pub fn bench_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/math");
    let ring: Vec<f32> = (0..1024).map(|i| (i as f32 * 0.01).sin()).collect();

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Fractional read walking around the ring
        group.bench_with_input(BenchmarkId::new("ring_interp", size), &size, |b, _| {
            b.iter(|| {
                let mut index = 0.0f32;
                for out in buffer.iter_mut() {
                    *out = ring_interp_linear(black_box(&ring), index);
                    index = wrap(index + 3.7, ring.len() as f32);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("db_to_linear", size), &size, |b, _| {
            b.iter(|| {
                for (i, out) in buffer.iter_mut().enumerate() {
                    *out = db_to_linear(black_box(-(i as f32) * 0.1));
                }
            })
        });
    }

    group.finish();
}

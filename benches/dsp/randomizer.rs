//! Benchmarks for the quantized randomizer.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ramp_dsp::dsp::Randomizer;

use crate::BLOCK_SIZES;

pub fn bench_randomizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/randomizer");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let mut coarse = Randomizer::new(0.0, 1.0, 0.1);
        group.bench_with_input(BenchmarkId::new("coarse", size), &size, |b, _| {
            b.iter(|| {
                coarse.fill(black_box(&mut buffer));
            })
        });

        let mut fine = Randomizer::new(-1.0, 1.0, 1e-4);
        group.bench_with_input(BenchmarkId::new("fine", size), &size, |b, _| {
            b.iter(|| {
                fine.fill(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}

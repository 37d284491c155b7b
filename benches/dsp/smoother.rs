//! Benchmarks for the linear smoother.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ramp_dsp::dsp::Smoother;

use crate::BLOCK_SIZES;

pub fn bench_smoother(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/smoother");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let mut smoother = Smoother::new(0.0, 48_000);
        group.bench_with_input(BenchmarkId::new("gliding", size), &size, |b, _| {
            b.iter(|| {
                // Retarget each iteration so the glide never settles
                let target = if smoother.get() > 0.5 { 0.0 } else { 1.0 };
                smoother.set_target(target);
                smoother.render(black_box(&mut buffer));
            })
        });

        let mut smoother = Smoother::new(0.25, 16);
        group.bench_with_input(BenchmarkId::new("at_rest", size), &size, |b, _| {
            b.iter(|| {
                smoother.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}

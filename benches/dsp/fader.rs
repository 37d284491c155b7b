//! Benchmarks for the linear fader.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ramp_dsp::dsp::Fader;

use crate::BLOCK_SIZES;

pub fn bench_fader(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/fader");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.5f32; size];

        // Long fade so the ramp is still moving
        let mut fader = Fader::new(10_000.0, 48_000.0);
        fader.set_enabled(true);
        group.bench_with_input(BenchmarkId::new("ramping", size), &size, |b, _| {
            b.iter(|| {
                fader.render(black_box(&mut buffer));
            })
        });

        // Settled at full gain
        let mut fader = Fader::new(0.0, 48_000.0);
        fader.set_enabled(true);
        group.bench_with_input(BenchmarkId::new("settled", size), &size, |b, _| {
            b.iter(|| {
                fader.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}

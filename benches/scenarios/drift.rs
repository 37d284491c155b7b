//! Benchmarks for a complete Drift voice.

use std::collections::VecDeque;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use ramp_dsp::{control::DriftMessage, Drift, DriftConfig};

use crate::BLOCK_SIZES;

pub fn bench_drift(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/drift");
    let mut idle: VecDeque<DriftMessage> = VecDeque::new();

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Gate open, fast note changes so glides are always in flight
        let mut drift = Drift::new(DriftConfig::default().hold_ms(20.0));
        drift.handle(DriftMessage::Gate(true));
        group.bench_with_input(BenchmarkId::new("playing", size), &size, |b, _| {
            b.iter(|| {
                drift.render(black_box(&mut buffer), &mut idle);
            })
        });

        // Retuning every block
        let mut drift = Drift::new(DriftConfig::default());
        drift.handle(DriftMessage::Gate(true));
        let mut seed = 0u32;
        group.bench_with_input(BenchmarkId::new("reseeding", size), &size, |b, _| {
            b.iter(|| {
                seed = seed.wrapping_add(1);
                let mut messages = VecDeque::from([DriftMessage::Reseed(seed)]);
                drift.render(black_box(&mut buffer), &mut messages);
            })
        });
    }

    group.finish();
}

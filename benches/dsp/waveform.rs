//! Benchmarks for per-sample waveform evaluation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use morph_osc::dsp::waveform::{sample_of, Waveform};

use crate::BLOCK_SIZES;

pub fn bench_waveform(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/waveform");
    let increment = std::f64::consts::TAU * 440.0 / 48_000.0;

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f64; size];

        // sine: sin(); square: sin() + branch; triangle: sin() + asin();
        // sawtooth: rem_euclid only
        for kind in Waveform::ALL {
            let name = format!("{kind:?}").to_lowercase();
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    for (i, out) in buffer.iter_mut().enumerate() {
                        *out = sample_of(black_box(kind), i as f64 * increment);
                    }
                    black_box(&buffer);
                })
            });
        }
    }

    group.finish();
}

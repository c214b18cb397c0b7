//! Benchmarks for rendering one morphing voice.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use morph_osc::synth::{MorphingVoice, SynthVoice};

use crate::BLOCK_SIZES;

pub fn bench_voice(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/voice");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![vec![0.0f32; size]; 2];

        // Integer position: one waveform effectively, but both are evaluated
        let mut pure = MorphingVoice::new();
        pure.start_note(69, 1.0, 48_000.0).unwrap();
        pure.set_morph(2.0);
        group.bench_with_input(BenchmarkId::new("triangle", size), &size, |b, _| {
            b.iter(|| {
                pure.render(black_box(&mut buffer), 0, size);
            })
        });

        // Most expensive pair: triangle (asin) blended with sawtooth
        let mut blend = MorphingVoice::new();
        blend.start_note(69, 1.0, 48_000.0).unwrap();
        blend.set_morph(2.5);
        group.bench_with_input(BenchmarkId::new("triangle_saw", size), &size, |b, _| {
            b.iter(|| {
                blend.render(black_box(&mut buffer), 0, size);
            })
        });

        // Silent voice should cost next to nothing
        let mut silent = MorphingVoice::new();
        group.bench_with_input(BenchmarkId::new("silent", size), &size, |b, _| {
            b.iter(|| {
                silent.render(black_box(&mut buffer), 0, size);
            })
        });
    }

    group.finish();
}

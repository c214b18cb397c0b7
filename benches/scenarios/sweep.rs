//! Host rendering with a morph change queued before every block.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use morph_osc::synth::{MorphSynth, SynthMessage};
use rtrb::RingBuffer;

use crate::BLOCK_SIZES;

pub fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/sweep");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![vec![0.0f32; size]; 2];
        let (mut tx, rx) = RingBuffer::<SynthMessage>::new(64);
        let mut synth = MorphSynth::new(48_000.0, rx).unwrap();
        tx.push(SynthMessage::NoteOn {
            note: 45,
            velocity: 1.0,
        })
        .unwrap();

        let mut position = 0.0;
        group.bench_with_input(BenchmarkId::new("stereo", size), &size, |b, _| {
            b.iter(|| {
                position = (position + 0.01) % 3.0;
                let _ = tx.push(SynthMessage::SetMorph { position });
                synth.render_block(black_box(&mut buffer), 0, size);
            })
        });
    }

    group.finish();
}

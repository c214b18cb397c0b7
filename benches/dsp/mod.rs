//! Benchmarks for low-level DSP primitives.

mod voice;
mod waveform;

pub use voice::bench_voice;
pub use waveform::bench_waveform;

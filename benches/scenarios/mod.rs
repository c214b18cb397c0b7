//! Real-world scenario benchmarks.
//!
//! These model a slider being dragged while a note sustains: a morph
//! message lands between every pair of blocks.

mod sweep;

pub use sweep::bench_sweep;

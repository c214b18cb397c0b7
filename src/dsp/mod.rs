//! Low-level DSP primitives used by the voice.
//!
//! Everything here is a pure function of its inputs: no allocation, no
//! locking, no state. The voice owns the phase; these modules only turn a
//! phase into a sample.

/// Two-waveform blend driven by a continuous morph position.
pub mod morph;
/// Sine, square, triangle and sawtooth as functions of phase.
pub mod waveform;

pub use morph::MorphPosition;
pub use waveform::Waveform;

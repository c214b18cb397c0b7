/// Capability tag a voice checks before accepting a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    /// Morphing sine/square/triangle/sawtooth oscillator.
    MorphingWaveform,
    /// Any sound rendered by some other engine (samples, external synths).
    External,
}

/// A sound a host can assign to voices.
pub trait SynthSound: Send {
    fn kind(&self) -> SoundKind;

    fn applies_to_note(&self, _note: u8) -> bool {
        true
    }

    fn applies_to_channel(&self, _channel: u8) -> bool {
        true
    }
}

/// The sound played by [`MorphingVoice`](crate::synth::voice::MorphingVoice).
/// Covers every note on every channel.
#[derive(Debug, Default, Clone, Copy)]
pub struct MorphingWaveformSound;

impl SynthSound for MorphingWaveformSound {
    fn kind(&self) -> SoundKind {
        SoundKind::MorphingWaveform
    }
}

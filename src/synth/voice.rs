use std::f64::consts::TAU;

use crate::{
    dsp::morph::MorphPosition,
    error::{check_sample_rate, ConfigError},
    io::{buffer::ChannelBuffer, converter::midi_note_to_freq},
    synth::sound::{SoundKind, SynthSound},
};

/// Note lifecycle shared by every voice a host can drive.
///
/// Control entry points (`start_note`, `stop_note`, controller changes) run
/// between render calls, so a change never lands halfway through a block.
pub trait SynthVoice: Send {
    /// Whether this voice knows how to render `sound`.
    fn can_play(&self, sound: &dyn SynthSound) -> bool;

    fn start_note(&mut self, note: u8, velocity: f32, sample_rate: f64)
        -> Result<(), ConfigError>;

    /// Silence immediately; there is no release tail.
    fn stop_note(&mut self);

    /// Sum `num_samples` frames into `out` starting at `start_sample`.
    fn render<B: ChannelBuffer + ?Sized>(
        &mut self,
        out: &mut B,
        start_sample: usize,
        num_samples: usize,
    );

    /// Ignored by default.
    fn pitch_wheel_moved(&mut self, _value: u16) {}

    /// Ignored by default.
    fn controller_moved(&mut self, _controller: u8, _value: u8) {}
}

/// One note of a morphing oscillator.
///
/// The voice keeps a phase accumulator in radians and, on every sample,
/// evaluates two adjacent waveforms at that phase and crossfades between them
/// by the morph fraction. The same value is summed into every output channel.
///
/// `phase_increment == 0.0` means "not sounding": `render` returns before
/// touching the buffer. The phase itself is never wrapped; at `f64` precision
/// the accumulated error after minutes of sustain is far below anything
/// audible, and every waveform is periodic in 2π anyway.
#[derive(Debug, Clone)]
pub struct MorphingVoice {
    phase: f64,
    phase_increment: f64,
    level: f64,
    morph: MorphPosition,
    note: Option<u8>,
}

impl MorphingVoice {
    pub fn new() -> Self {
        Self {
            phase: 0.0,
            phase_increment: 0.0,
            level: 1.0,
            morph: MorphPosition::SINE,
            note: None,
        }
    }

    /// Move the morph control. 0.0 is pure sine, 3.0 pure sawtooth; values
    /// outside that range saturate.
    pub fn set_morph(&mut self, position: f64) {
        self.morph = MorphPosition::from_position(position);
    }

    pub fn morph(&self) -> MorphPosition {
        self.morph
    }

    /// Current phase in radians (unwrapped).
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Radians advanced per sample; zero while silent.
    pub fn phase_increment(&self) -> f64 {
        self.phase_increment
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    /// The note currently sounding, if any.
    pub fn note(&self) -> Option<u8> {
        self.note
    }

    pub fn is_active(&self) -> bool {
        self.phase_increment != 0.0
    }
}

impl Default for MorphingVoice {
    fn default() -> Self {
        Self::new()
    }
}

impl SynthVoice for MorphingVoice {
    fn can_play(&self, sound: &dyn SynthSound) -> bool {
        sound.kind() == SoundKind::MorphingWaveform
    }

    fn start_note(
        &mut self,
        note: u8,
        _velocity: f32,
        sample_rate: f64,
    ) -> Result<(), ConfigError> {
        let sample_rate = check_sample_rate(sample_rate)?;
        if note > 127 {
            return Err(ConfigError::InvalidNote(note));
        }

        let frequency = midi_note_to_freq(note);
        self.phase = 0.0;
        self.phase_increment = TAU * frequency / sample_rate;
        self.note = Some(note);
        Ok(())
    }

    fn stop_note(&mut self) {
        self.phase_increment = 0.0;
        self.note = None;
    }

    fn render<B: ChannelBuffer + ?Sized>(
        &mut self,
        out: &mut B,
        start_sample: usize,
        num_samples: usize,
    ) {
        if self.phase_increment == 0.0 {
            return;
        }

        let channels = out.num_channels();
        let morph = self.morph;

        for frame in start_sample..start_sample.saturating_add(num_samples) {
            let sample = (morph.sample(self.phase) * self.level) as f32;
            for channel in 0..channels {
                out.add_sample(channel, frame, sample);
            }
            self.phase += self.phase_increment;
        }
    }
}

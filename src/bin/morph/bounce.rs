//! Offline renderer: plays one note through the control queue and the
//! audio-thread host, block by block, as a device callback would.

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use rtrb::{Producer, RingBuffer};

use morph_osc::{
    io::{converter::midi_note_to_freq, Interleaved},
    synth::{MessageReceiver, MorphSynth, SynthMessage},
    EngineConfig,
};

/// Render builder
pub struct Bounce {
    config: EngineConfig,
    note: u8,
    velocity: f32,
    seconds: f64,
}

/// What the render produced, measured on the first channel.
pub struct Summary {
    pub frames: usize,
    pub channels: usize,
    pub peak: f32,
    pub rms: f32,
    pub expected_hz: f64,
    pub estimated_hz: f64,
}

impl Bounce {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            note: 69,
            velocity: 1.0,
            seconds: 1.0,
        }
    }

    pub fn note(mut self, note: u8) -> Self {
        self.note = note;
        self
    }

    pub fn seconds(mut self, seconds: f64) -> Self {
        self.seconds = seconds;
        self
    }

    pub fn run(self) -> EyreResult<Summary> {
        self.config.validate().wrap_err("invalid engine config")?;
        if !(self.seconds.is_finite() && self.seconds > 0.0) {
            return Err(eyre!("duration must be positive, got {}", self.seconds));
        }
        if self.note > 127 {
            return Err(eyre!("MIDI note must be in 0..=127, got {}", self.note));
        }

        let EngineConfig {
            sample_rate,
            channels,
            block_size,
            initial_morph,
            queue_capacity,
        } = self.config;

        let (mut tx, rx) = RingBuffer::<SynthMessage>::new(queue_capacity);
        let mut synth = MorphSynth::new(sample_rate, rx).wrap_err("failed to create synth")?;

        send(
            &mut tx,
            SynthMessage::SetMorph {
                position: initial_morph,
            },
        )?;
        send(
            &mut tx,
            SynthMessage::NoteOn {
                note: self.note,
                velocity: self.velocity,
            },
        )?;

        let frames = (self.seconds * sample_rate).round() as usize;
        let mut data = vec![0.0f32; frames * channels];
        render_all(&mut synth, &mut data, channels, block_size);

        send(&mut tx, SynthMessage::NoteOff { note: self.note })?;
        let mut tail = vec![0.0f32; block_size * channels];
        render_all(&mut synth, &mut tail, channels, block_size);
        if tail.iter().any(|&s| s != 0.0) {
            return Err(eyre!("voice kept sounding after note-off"));
        }

        let left: Vec<f32> = data.iter().step_by(channels).copied().collect();
        Ok(Summary {
            frames,
            channels,
            peak: left.iter().fold(0.0f32, |acc, &x| acc.max(x.abs())),
            rms: rms(&left),
            expected_hz: midi_note_to_freq(self.note),
            estimated_hz: rising_crossings(&left) as f64 / self.seconds,
        })
    }
}

fn send(tx: &mut Producer<SynthMessage>, msg: SynthMessage) -> EyreResult<()> {
    tx.push(msg)
        .map_err(|_| eyre!("control queue full, dropped {msg:?}"))
}

fn render_all<R: MessageReceiver>(
    synth: &mut MorphSynth<R>,
    data: &mut [f32],
    channels: usize,
    block_size: usize,
) {
    for chunk in data.chunks_mut(block_size * channels) {
        let frames = chunk.len() / channels;
        let mut out = Interleaved::new(chunk, channels);
        synth.render_block(&mut out, 0, frames);
    }
}

fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().map(|&s| f64::from(s) * f64::from(s)).sum();
    (sum / samples.len() as f64).sqrt() as f32
}

/// Count negative-to-non-negative transitions. Exact for the pure
/// waveforms; some blends cross zero twice per cycle and read high.
fn rising_crossings(samples: &[f32]) -> usize {
    samples
        .windows(2)
        .filter(|w| w[0] < 0.0 && w[1] >= 0.0)
        .count()
}

use crate::{
    error::{check_sample_rate, ConfigError},
    io::buffer::ChannelBuffer,
    synth::{
        message::{MessageReceiver, SynthMessage},
        sound::MorphingWaveformSound,
        voice::{MorphingVoice, SynthVoice},
    },
};

/// Audio-thread side of a single morphing voice.
///
/// Control threads never touch the voice directly; they push
/// [`SynthMessage`]s into a lock-free queue, and `render_block` drains it
/// before rendering. A message that arrives mid-block takes effect at the
/// next block.
pub struct MorphSynth<R: MessageReceiver> {
    voice: MorphingVoice,
    sound: MorphingWaveformSound,
    sample_rate: f64,
    rx: R,
}

impl<R: MessageReceiver> MorphSynth<R> {
    pub fn new(sample_rate: f64, rx: R) -> Result<Self, ConfigError> {
        Ok(Self {
            voice: MorphingVoice::new(),
            sound: MorphingWaveformSound,
            sample_rate: check_sample_rate(sample_rate)?,
            rx,
        })
    }

    /// Change the playback rate. Takes effect from the next note-on; a note
    /// already sounding keeps its pitch.
    pub fn set_sample_rate(&mut self, sample_rate: f64) -> Result<(), ConfigError> {
        self.sample_rate = check_sample_rate(sample_rate)?;
        Ok(())
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn voice(&self) -> &MorphingVoice {
        &self.voice
    }

    /// Apply one control message.
    pub fn handle_message(&mut self, msg: SynthMessage) {
        match msg {
            SynthMessage::NoteOn { note, velocity } => {
                if self.voice.can_play(&self.sound) {
                    // Out-of-range notes are dropped; the voice keeps its state
                    let _ = self.voice.start_note(note, velocity, self.sample_rate);
                }
            }
            SynthMessage::NoteOff { note } => {
                if self.voice.note() == Some(note) {
                    self.voice.stop_note();
                }
            }
            SynthMessage::SetMorph { position } => self.voice.set_morph(position),
            SynthMessage::AllNotesOff => self.voice.stop_note(),
        }
    }

    /// Drain pending messages, clear `[start_sample, start_sample + num_samples)`
    /// on every channel, then sum the voice into it.
    pub fn render_block<B: ChannelBuffer + ?Sized>(
        &mut self,
        out: &mut B,
        start_sample: usize,
        num_samples: usize,
    ) {
        while let Some(msg) = self.rx.pop() {
            self.handle_message(msg);
        }

        out.clear_region(start_sample, num_samples);
        self.voice.render(out, start_sample, num_samples);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::waveform::Waveform;
    use crate::synth::message::NoMessages;

    /// Fixed script of messages, popped front to back.
    struct Script(Vec<SynthMessage>);

    impl MessageReceiver for Script {
        fn pop(&mut self) -> Option<SynthMessage> {
            if self.0.is_empty() {
                None
            } else {
                Some(self.0.remove(0))
            }
        }
    }

    #[test]
    fn rejects_bad_sample_rate() {
        assert!(MorphSynth::new(0.0, NoMessages).is_err());
        let mut synth = MorphSynth::new(48_000.0, NoMessages).unwrap();
        assert_eq!(
            synth.set_sample_rate(-1.0),
            Err(ConfigError::InvalidSampleRate(-1.0))
        );
        assert_eq!(synth.sample_rate(), 48_000.0);
    }

    #[test]
    fn messages_apply_before_rendering() {
        let rx = Script(vec![
            SynthMessage::SetMorph { position: 1.0 },
            SynthMessage::NoteOn {
                note: 69,
                velocity: 1.0,
            },
        ]);
        let mut synth = MorphSynth::new(48_000.0, rx).unwrap();
        let mut buffer = vec![vec![0.0f32; 16]; 2];
        synth.render_block(&mut buffer, 0, 16);

        assert_eq!(synth.voice().note(), Some(69));
        assert_eq!(synth.voice().morph().low, Waveform::Square);
        // Square starts high
        assert!(buffer.iter().flatten().all(|&s| s == 1.0));
    }

    #[test]
    fn render_block_clears_region_first() {
        let mut synth = MorphSynth::new(48_000.0, NoMessages).unwrap();
        let mut buffer = vec![vec![0.7f32; 8]; 2];
        synth.render_block(&mut buffer, 2, 4);
        for channel in &buffer {
            assert_eq!(channel, &vec![0.7, 0.7, 0.0, 0.0, 0.0, 0.0, 0.7, 0.7]);
        }
    }

    #[test]
    fn note_off_only_stops_matching_note() {
        let mut synth = MorphSynth::new(48_000.0, NoMessages).unwrap();
        synth.handle_message(SynthMessage::NoteOn {
            note: 60,
            velocity: 0.5,
        });
        synth.handle_message(SynthMessage::NoteOff { note: 62 });
        assert!(synth.voice().is_active());

        synth.handle_message(SynthMessage::NoteOff { note: 60 });
        assert!(!synth.voice().is_active());
    }

    #[test]
    fn all_notes_off_silences() {
        let mut synth = MorphSynth::new(44_100.0, NoMessages).unwrap();
        synth.handle_message(SynthMessage::NoteOn {
            note: 48,
            velocity: 1.0,
        });
        synth.handle_message(SynthMessage::AllNotesOff);
        assert!(!synth.voice().is_active());
    }

    #[test]
    fn invalid_note_is_ignored() {
        let mut synth = MorphSynth::new(44_100.0, NoMessages).unwrap();
        synth.handle_message(SynthMessage::NoteOn {
            note: 200,
            velocity: 1.0,
        });
        assert!(!synth.voice().is_active());
    }

    #[cfg(feature = "rtrb")]
    #[test]
    fn drives_voice_through_ring_buffer() {
        use rtrb::RingBuffer;

        let (mut tx, rx) = RingBuffer::<SynthMessage>::new(8);
        let mut synth = MorphSynth::new(48_000.0, rx).unwrap();
        let mut buffer = vec![vec![0.0f32; 64]];

        tx.push(SynthMessage::NoteOn {
            note: 60,
            velocity: 1.0,
        })
        .unwrap();
        synth.render_block(&mut buffer, 0, 64);
        assert!(buffer[0].iter().any(|&s| s != 0.0));

        tx.push(SynthMessage::NoteOff { note: 60 }).unwrap();
        synth.render_block(&mut buffer, 0, 64);
        assert!(buffer[0].iter().all(|&s| s == 0.0));
    }
}

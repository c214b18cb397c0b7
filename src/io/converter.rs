use crate::{io::midi::MidiEvent, synth::message::SynthMessage};

/// MIDI "All Notes Off" channel-mode controller.
pub const CC_ALL_NOTES_OFF: u8 = 123;

/// Translate a raw MIDI event on `channel_filter` into a synth message.
///
/// A note-on with velocity zero is a note-off, as the MIDI running-status
/// convention requires. Events on other channels and events the voice has no
/// use for (pitch bend, program change, other controllers) map to `None`.
pub fn midi_to_synth(midi: MidiEvent, channel_filter: u8) -> Option<SynthMessage> {
    match midi {
        MidiEvent::NoteOn {
            channel,
            key,
            velocity: 0,
        } if channel == channel_filter => Some(SynthMessage::NoteOff { note: key }),
        MidiEvent::NoteOn {
            channel,
            key,
            velocity,
        } if channel == channel_filter => Some(SynthMessage::NoteOn {
            note: key,
            velocity: velocity_to_unit(velocity),
        }),
        MidiEvent::NoteOff { channel, key, .. } if channel == channel_filter => {
            Some(SynthMessage::NoteOff { note: key })
        }
        MidiEvent::ControlChange {
            channel,
            controller: CC_ALL_NOTES_OFF,
            ..
        } if channel == channel_filter => Some(SynthMessage::AllNotesOff),
        _ => None,
    }
}

/// Map a 7-bit MIDI velocity onto 0.0..=1.0.
pub fn velocity_to_unit(velocity: u8) -> f32 {
    f32::from(velocity.min(127)) / 127.0
}

/// Equal-tempered frequency of a MIDI note, A4 (69) = 440 Hz.
pub fn midi_note_to_freq(note: u8) -> f64 {
    440.0 * 2.0_f64.powf((f64::from(note) - 69.0) / 12.0)
}

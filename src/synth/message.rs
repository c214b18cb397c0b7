#[cfg(feature = "rtrb")]
use rtrb::Consumer;

/// Control messages sent from the UI/MIDI thread to the audio thread.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SynthMessage {
    /// `velocity` is in 0.0..=1.0.
    NoteOn { note: u8, velocity: f32 },
    NoteOff { note: u8 },
    /// Morph position, 0.0 (sine) to 3.0 (sawtooth).
    SetMorph { position: f64 },
    AllNotesOff,
}

/// Source of control messages drained at the start of each audio block.
///
/// Implementations must not block or allocate in `pop`.
pub trait MessageReceiver {
    fn pop(&mut self) -> Option<SynthMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<SynthMessage> {
    fn pop(&mut self) -> Option<SynthMessage> {
        Consumer::pop(self).ok()
    }
}

/// Receiver for hosts that drive the voice directly and never send messages.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMessages;

impl MessageReceiver for NoMessages {
    fn pop(&mut self) -> Option<SynthMessage> {
        None
    }
}

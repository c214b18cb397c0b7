// Purpose: note lifecycle, voice rendering, and the control-message path
// from UI/MIDI threads to the audio thread

pub mod host;
pub mod message;
pub mod sound;
pub mod voice;

pub use host::MorphSynth;
pub use message::{MessageReceiver, SynthMessage};
pub use sound::{MorphingWaveformSound, SoundKind, SynthSound};
pub use voice::{MorphingVoice, SynthVoice};

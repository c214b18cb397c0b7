// Purpose - external interfaces: output buffers, MIDI decoding, conversions

pub mod buffer;
pub mod converter;
pub mod midi;

pub use buffer::{ChannelBuffer, Interleaved};

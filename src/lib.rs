pub mod config;
pub mod dsp;
pub mod error;
pub mod io;
pub mod synth; // Voice rendering and control messages

pub use config::EngineConfig;
pub use error::ConfigError;

/// Largest block a host may ask for in one render call.
pub const MAX_BLOCK_SIZE: usize = 2048;

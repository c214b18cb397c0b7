use std::fmt;

/// Invalid settings rejected before they reach the audio path.
///
/// Rendering itself has no error cases; everything that can go wrong is
/// caught when a note starts or when the engine is configured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Sample rate must be finite and strictly positive.
    InvalidSampleRate(f64),
    /// MIDI note numbers run from 0 to 127.
    InvalidNote(u8),
    InvalidChannelCount(usize),
    /// Block size must be in `1..=MAX_BLOCK_SIZE`.
    InvalidBlockSize(usize),
    InvalidQueueCapacity(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSampleRate(rate) => {
                write!(f, "sample rate must be a positive finite number, got {rate}")
            }
            ConfigError::InvalidNote(note) => {
                write!(f, "MIDI note must be in 0..=127, got {note}")
            }
            ConfigError::InvalidChannelCount(channels) => {
                write!(f, "channel count must be at least 1, got {channels}")
            }
            ConfigError::InvalidBlockSize(size) => write!(
                f,
                "block size must be in 1..={}, got {size}",
                crate::MAX_BLOCK_SIZE
            ),
            ConfigError::InvalidQueueCapacity(capacity) => {
                write!(f, "message queue capacity must be at least 1, got {capacity}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Check a sample rate before it is used as a divisor.
pub(crate) fn check_sample_rate(sample_rate: f64) -> Result<f64, ConfigError> {
    if sample_rate.is_finite() && sample_rate > 0.0 {
        Ok(sample_rate)
    } else {
        Err(ConfigError::InvalidSampleRate(sample_rate))
    }
}

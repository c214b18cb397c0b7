#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{check_sample_rate, ConfigError};
use crate::MAX_BLOCK_SIZE;

/// Settings shared by the host and the offline renderer.
///
/// Buffer geometry and sample rate normally come from the audio device; the
/// defaults describe a typical 48 kHz stereo stream.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub sample_rate: f64,
    pub channels: usize,
    /// Frames rendered per call.
    pub block_size: usize,
    /// Morph position applied before the first note.
    pub initial_morph: f64,
    /// Capacity of the control message queue.
    pub queue_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000.0,
            channels: 2,
            block_size: 512,
            initial_morph: 0.0,
            queue_capacity: 64,
        }
    }
}

impl EngineConfig {
    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_channels(mut self, channels: usize) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_initial_morph(mut self, position: f64) -> Self {
        self.initial_morph = position;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Reject settings the audio path cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_sample_rate(self.sample_rate)?;
        if self.channels == 0 {
            return Err(ConfigError::InvalidChannelCount(self.channels));
        }
        if self.block_size == 0 || self.block_size > MAX_BLOCK_SIZE {
            return Err(ConfigError::InvalidBlockSize(self.block_size));
        }
        if self.queue_capacity == 0 {
            return Err(ConfigError::InvalidQueueCapacity(self.queue_capacity));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn builder_overrides() {
        let config = EngineConfig::default()
            .with_sample_rate(44_100.0)
            .with_channels(1)
            .with_block_size(128)
            .with_initial_morph(2.5)
            .with_queue_capacity(16);
        assert_eq!(config.sample_rate, 44_100.0);
        assert_eq!(config.channels, 1);
        assert_eq!(config.block_size, 128);
        assert_eq!(config.initial_morph, 2.5);
        assert_eq!(config.queue_capacity, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_settings() {
        let base = EngineConfig::default();
        assert_eq!(
            base.clone().with_sample_rate(0.0).validate(),
            Err(ConfigError::InvalidSampleRate(0.0))
        );
        assert_eq!(
            base.clone().with_channels(0).validate(),
            Err(ConfigError::InvalidChannelCount(0))
        );
        assert_eq!(
            base.clone().with_block_size(MAX_BLOCK_SIZE + 1).validate(),
            Err(ConfigError::InvalidBlockSize(MAX_BLOCK_SIZE + 1))
        );
        assert_eq!(
            base.with_queue_capacity(0).validate(),
            Err(ConfigError::InvalidQueueCapacity(0))
        );
    }
}

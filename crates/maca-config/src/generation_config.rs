use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Video job polling
pub const MIN_POLL_INTERVAL_SECS: u64 = 1;
pub const MAX_POLL_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

pub const MIN_MAX_WAIT_SECS: u64 = 30;
pub const MAX_MAX_WAIT_SECS: u64 = 3600;
pub const DEFAULT_MAX_WAIT_SECS: u64 = 600;

/// Generation orchestration settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Seconds between two video job status queries
    pub poll_interval_secs: u64,
    /// Upper bound on the total wait for a video job
    pub max_wait_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            max_wait_secs: DEFAULT_MAX_WAIT_SECS,
        }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.poll_interval_secs < MIN_POLL_INTERVAL_SECS
            || self.poll_interval_secs > MAX_POLL_INTERVAL_SECS
        {
            return Err(ConfigError::config(format!(
                "generation.poll_interval_secs must be {}-{}, got {}",
                MIN_POLL_INTERVAL_SECS, MAX_POLL_INTERVAL_SECS, self.poll_interval_secs
            )));
        }

        if self.max_wait_secs < MIN_MAX_WAIT_SECS || self.max_wait_secs > MAX_MAX_WAIT_SECS {
            return Err(ConfigError::config(format!(
                "generation.max_wait_secs must be {}-{}, got {}",
                MIN_MAX_WAIT_SECS, MAX_MAX_WAIT_SECS, self.max_wait_secs
            )));
        }

        if self.max_wait_secs < self.poll_interval_secs {
            return Err(ConfigError::config(format!(
                "generation.max_wait_secs ({}) must be >= poll_interval_secs ({})",
                self.max_wait_secs, self.poll_interval_secs
            )));
        }

        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn max_wait(&self) -> Duration {
        Duration::from_secs(self.max_wait_secs)
    }
}

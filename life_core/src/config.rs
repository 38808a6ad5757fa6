// config.rs - Configuration for a Life session

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Largest board a config may ask for (cells).
pub const MAX_CELLS: usize = 4_000_000;
/// Fastest pace a config may ask for: 60 generations per second.
pub const MIN_STEP_INTERVAL_SECS: f32 = 1.0 / 60.0;
/// Slowest pace a config may ask for: one generation every 2 seconds.
pub const MAX_STEP_INTERVAL_SECS: f32 = 2.0;

/// Board dimensions and pacing. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Board width in cells.
    pub width: usize,
    /// Board height in cells.
    pub height: usize,
    /// Real time between generations while running, in seconds.
    pub step_interval_secs: f32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            step_interval_secs: 1.0,
        }
    }
}

impl LifeConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        match self.width.checked_mul(self.height) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => return Err(ConfigError::TooManyCells { width: self.width, height: self.height }),
        }
        let secs = self.step_interval_secs;
        let in_range = (MIN_STEP_INTERVAL_SECS..=MAX_STEP_INTERVAL_SECS).contains(&secs);
        match Duration::try_from_secs_f32(secs) {
            Ok(interval) if in_range && !interval.is_zero() => Ok(()),
            _ => Err(ConfigError::InvalidStepInterval(secs)),
        }
    }

    /// Pace as a `Duration`.
    ///
    /// # Panics
    /// If `step_interval_secs` is negative, non-finite or too large for a
    /// `Duration`; [`validate`](Self::validate) rules all of these out.
    #[inline]
    pub fn step_interval(&self) -> Duration {
        Duration::from_secs_f32(self.step_interval_secs)
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Board dimensions (width, height) must be non-zero")]
    InvalidDimensions,
    #[error("Board of {width}x{height} exceeds {max} cells", max = MAX_CELLS)]
    TooManyCells { width: usize, height: usize },
    #[error("Step interval must be between {min} and {max} seconds, got {0}",
            min = MIN_STEP_INTERVAL_SECS, max = MAX_STEP_INTERVAL_SECS)]
    InvalidStepInterval(f32),
}

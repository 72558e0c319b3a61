//! Game settings and preferences
//!
//! Loaded from a JSON file by the binary; any missing field falls back to
//! its default.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{AREA_HEIGHT, AREA_WIDTH, TICK_RATE};
use crate::error::ConfigError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Play area ===
    /// Play area width (pixels)
    pub width: f64,
    /// Play area height (pixels)
    pub height: f64,

    // === Simulation ===
    /// Run seed for reproducibility
    pub seed: u64,
    /// Fixed ticks per second
    pub tick_rate: u32,

    // === Visual Effects ===
    /// Screen shake on impacts
    pub screen_shake: bool,

    // === Accessibility ===
    /// Reduced motion (suppresses shake)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: AREA_WIDTH,
            height: AREA_HEIGHT,
            seed: 0,
            tick_rate: TICK_RATE,
            screen_shake: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.width) || !positive(self.height) {
            return Err(ConfigError::Invalid {
                message: format!("play area must be positive, got {}x{}", self.width, self.height),
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid {
                message: "tick_rate must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Wall-clock length of one tick
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate.max(1)))
    }
}

//! Game settings and preferences
//!
//! Read from a JSON file next to the game (or `$PONG_SETTINGS`). Every field is
//! optional in the file; missing ones take their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SPEED_SLIDER;
use crate::error::{PongError, Result};

/// Environment variable overriding the settings file location
pub const SETTINGS_ENV: &str = "PONG_SETTINGS";
/// Settings file used when the environment variable is unset
pub const DEFAULT_SETTINGS_FILE: &str = "pong_settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for serve directions (None = pick one from the clock)
    pub seed: Option<u64>,
    /// Initial ball speed slider position (0.0 - 1.0)
    pub speed_slider: f32,
    /// Sync presentation to the display
    pub vsync: bool,
    /// Log frames per second once a second
    pub show_fps: bool,
    /// Initial window size as a multiple of the 800x480 court
    pub window_scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            speed_slider: DEFAULT_SPEED_SLIDER,
            vsync: true,
            show_fps: false,
            window_scale: 1.0,
        }
    }
}

impl Settings {
    /// Settings file location: `$PONG_SETTINGS` or `pong_settings.json`
    pub fn path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    /// Parse settings from JSON text
    pub fn from_json(json: &str, path: &Path) -> Result<Self> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|source| PongError::SettingsParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(settings.sanitized())
    }

    /// Read settings from a file
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| PongError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json, path)
    }

    /// Load settings, falling back to defaults if the file is missing or broken
    pub fn load() -> Self {
        let path = Self::path();
        if !path.exists() {
            log::info!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(PongError::SettingsSerialize)?;
        std::fs::write(path, json).map_err(|source| PongError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Clamp out-of-range values into something playable
    pub fn sanitized(mut self) -> Self {
        self.speed_slider = if self.speed_slider.is_finite() {
            self.speed_slider.clamp(0.0, 1.0)
        } else {
            DEFAULT_SPEED_SLIDER
        };
        self.window_scale = if self.window_scale.is_finite() {
            self.window_scale.clamp(0.5, 4.0)
        } else {
            1.0
        };
        self
    }
}

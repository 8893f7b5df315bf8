//! Startup configuration
//!
//! Read from an optional JSON file; every field has a default so partial
//! files work.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Cells per side, including the emitter ring
    pub board_size: usize,

    // === Viewport ===
    pub window_width: f32,
    pub window_height: f32,

    /// Fixed starting seed; a random 4-digit seed is used when absent
    pub seed: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path`, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Using default settings ({}: {err})", path.display());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(SettingsError::InvalidBoardSize(self.board_size));
        }
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(SettingsError::InvalidViewport {
                width: self.window_width,
                height: self.window_height,
            });
        }
        Ok(())
    }

    /// Copy with the board size clamped into range and a usable viewport
    pub fn clamped(&self) -> Self {
        let viewport_ok = self.window_width > 0.0 && self.window_height > 0.0;
        Self {
            board_size: self.board_size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE),
            window_width: if viewport_ok {
                self.window_width
            } else {
                DEFAULT_WINDOW_WIDTH
            },
            window_height: if viewport_ok {
                self.window_height
            } else {
                DEFAULT_WINDOW_HEIGHT
            },
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.board_size, 10);
        assert_eq!(settings.seed, None);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "board_size": 12, "seed": 4242 }"#).unwrap();
        assert_eq!(settings.board_size, 12);
        assert_eq!(settings.seed, Some(4242));
        assert_eq!(settings.window_width, DEFAULT_WINDOW_WIDTH);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(77),
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(matches!(
            Settings::from_json(r#"{ "board_size": 30 }"#),
            Err(SettingsError::InvalidBoardSize(30))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "window_height": 0.0 }"#),
            Err(SettingsError::InvalidViewport { .. })
        ));
        assert!(matches!(
            Settings::from_json("not json"),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn test_clamped() {
        let settings = Settings {
            board_size: 64,
            window_width: -1.0,
            ..Default::default()
        }
        .clamped();
        assert_eq!(settings.board_size, MAX_BOARD_SIZE);
        assert_eq!(settings.window_width, DEFAULT_WINDOW_WIDTH);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let settings = Settings::load(Path::new("/nonexistent/lightbox.json"));
        assert_eq!(settings, Settings::default());
    }
}

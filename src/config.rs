//! User settings.
//!
//! Settings are read from a JSON file in the platform config directory. Every field has a
//! default, so a partial file (or no file at all) is fine.

use std::path::{Path, PathBuf};

use glam::Vec4;
use log::LevelFilter;

use crate::error::ConfigError;

/// Window the demo opens.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Render Engine".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
        }
    }
}

/// Everything read from `settings.json`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub clear_color: [f32; 4],
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            clear_color: [1.0, 0.0, 0.0, 1.0],
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Parses settings from a JSON string.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Reads and parses the settings file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// `<config dir>/render-engine/settings.json`, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("render-engine").join("settings.json"))
    }

    /// Loads the settings file at [`Settings::default_path`], falling back to the defaults when
    /// it does not exist.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Unknown level names fall back to `Info`.
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Returns the clear color as a vector.
    pub fn clear_color_vec(&self) -> Vec4 {
        Vec4::from_array(self.clear_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.clear_color_vec(), Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(settings.log_level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_settings() {
        let settings = Settings::from_json(
            r#"{ "window": { "width": 800 }, "clear_color": [0.0, 0.0, 1.0, 1.0], "log_level": "debug" }"#,
        )
        .unwrap();
        assert_eq!(settings.window.width, 800);
        assert_eq!(settings.window.height, 720);
        assert_eq!(settings.window.title, "Render Engine");
        assert_eq!(settings.clear_color_vec(), Vec4::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(settings.log_level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let settings = Settings {
            log_level: "loud".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.log_level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_invalid_json() {
        let err = Settings::from_json("{ \"window\": 3 }").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("render-engine-missing-settings.json");
        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("render-engine-settings-{}.json", std::process::id()));
        let settings = Settings {
            clear_color: [0.2, 0.3, 0.3, 1.0],
            ..Settings::default()
        };
        std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
        let loaded = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }
}

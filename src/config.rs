//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! `clockface.toml` file. The canvas size and hand geometry are fixed; what
//! can be tuned is the rendering variant, the cadences, the placement of the
//! weather strip, the weather source and the log filter.
//!
//! Every section and field has a default, so a partial file (or none at all)
//! still produces a working face.

use crate::hands::RenderMode;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "clockface.toml";

/// Errors while reading or writing the config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config IO: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config serialization: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Application configuration loaded from clockface.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Face rendering options
    pub face: FaceConfig,
    /// Cadence periods
    pub cadence: CadenceConfig,
    /// Weather strip placement
    pub marquee: MarqueeConfig,
    /// Weather source
    pub weather: WeatherConfig,
    /// Log filter
    pub logging: LoggingSection,
}

/// Face rendering configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FaceConfig {
    /// `marker` (flat dots) or `gradient` (conic rings)
    pub mode: RenderMode,
    /// Dithering pixels painted over the gradient background each frame
    pub noise_pixels: u32,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::Marker,
            noise_pixels: 20,
        }
    }
}

/// Cadence periods in milliseconds
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CadenceConfig {
    pub frame_ms: u64,
    pub weather_poll_ms: u64,
    pub scroll_ms: u64,
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            frame_ms: 1_000,
            weather_poll_ms: 300_000,
            scroll_ms: 300,
        }
    }
}

/// Weather strip layout, in device pixels
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MarqueeConfig {
    /// Left edge of the label
    pub x: i32,
    /// Bottom row of the label
    pub y: i32,
    /// Label slot width; longer labels scroll
    pub max_width: u32,
    /// Top-left corner of the 8×8 icon
    pub icon_x: i32,
    pub icon_y: i32,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            x: 20,
            y: 62,
            max_width: 44,
            icon_x: 10,
            icon_y: 55,
        }
    }
}

/// Where weather readings come from
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// JSON snapshot file; when unset the face shows a fixed condition
    pub snapshot: Option<PathBuf>,
    /// Fixed condition label used when no snapshot file is configured
    pub condition: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSection {
    /// `env_logger` filter, e.g. `"info"` or `"clockface=debug"`
    pub filter: Option<String>,
}

impl Config {
    /// Load configuration from clockface.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::try_load_from_path(path) {
            Ok(config) => {
                info!(
                    "loaded configuration from {} ({:?} mode)",
                    path.display(),
                    config.face.mode
                );
                config
            }
            Err(ConfigError::Io(_)) => {
                info!("no config file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("{} ignored: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load configuration from `path`, reporting every failure.
    pub fn try_load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save current configuration to `path`
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        info!("configuration saved to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.face.mode, RenderMode::Marker);
        assert_eq!(config.face.noise_pixels, 20);
        assert_eq!(config.cadence.frame_ms, 1_000);
        assert_eq!(config.cadence.weather_poll_ms, 300_000);
        assert_eq!(config.cadence.scroll_ms, 300);
        assert_eq!(config.marquee.max_width, 44);
        assert_eq!(config.weather.snapshot, None);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.face.mode = RenderMode::Gradient;
        config.weather.snapshot = Some(PathBuf::from("/tmp/weather.json"));

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let parsed: Config = toml::from_str(
            r#"
[face]
mode = "gradient"

[marquee]
max_width = 40
"#,
        )
        .unwrap();
        assert_eq!(parsed.face.mode, RenderMode::Gradient);
        assert_eq!(parsed.face.noise_pixels, 20);
        assert_eq!(parsed.marquee.max_width, 40);
        assert_eq!(parsed.marquee.x, 20);
        assert_eq!(parsed.cadence, CadenceConfig::default());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let config = Config::load_from_path("/nonexistent/path");
        // Should fallback to default
        assert_eq!(config, Config::default());
        assert!(matches!(
            Config::try_load_from_path("/nonexistent/path"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "[face]\nmode = \"hologram\"\n").unwrap();

        assert!(matches!(
            Config::try_load_from_path(temp_file.path()),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(Config::load_from_path(temp_file.path()), Config::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.logging.filter = Some("clockface=debug".to_string());
        config.save_to_path(temp_file.path()).unwrap();

        let reloaded = Config::try_load_from_path(temp_file.path()).unwrap();
        assert_eq!(reloaded, config);
    }
}

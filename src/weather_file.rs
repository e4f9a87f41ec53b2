//! # File-backed Weather Provider
//!
//! Reads the current weather from a small JSON snapshot that some other
//! process (a cron job, a home-automation hook) keeps up to date:
//!
//! ```json
//! { "status": "ok", "valid": true, "condition": "rain" }
//! ```
//!
//! ## Polling
//! The file is read only when the engine polls, every five minutes by
//! default. Between polls the last reading is served from memory.
//!
//! ## Error Handling
//! Failure modes are collected in [`WeatherFileError`]:
//! - **Missing or unreadable file**: permissions, path typo, not written yet
//! - **Malformed JSON**: partial writes or a wrong schema
//! - **Unknown status**: anything other than `ok`, `connecting` or `error`
//!
//! None of them reach the render path. A failed poll logs a warning and
//! switches the reading to [`WeatherStatus::Error`], so the face shows the
//! error glyph until a later poll succeeds.

use crate::weather::{WeatherProvider, WeatherSample, WeatherStatus};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors that can occur while reading a weather snapshot.
#[derive(Error, Debug)]
pub enum WeatherFileError {
    /// Snapshot file could not be read
    #[error("weather file IO: {0}")]
    Io(#[from] io::Error),

    /// Snapshot is not valid JSON or does not match the schema
    #[error("weather file parse: {0}")]
    Parse(#[from] serde_json::Error),

    /// `status` field holds an unrecognized value
    #[error("unknown weather status {0:?}")]
    UnknownStatus(String),
}

/// On-disk shape of a snapshot.
#[derive(Debug, Deserialize, Serialize)]
pub struct WeatherSnapshot {
    pub status: String,
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub condition: String,
}

impl WeatherSnapshot {
    /// Convert into a sample, decoding status and condition.
    pub fn into_sample(self) -> Result<WeatherSample, WeatherFileError> {
        let status = match self.status.trim().to_ascii_lowercase().as_str() {
            "ok" => WeatherStatus::Ok,
            "connecting" => WeatherStatus::Connecting,
            "error" => WeatherStatus::Error,
            _ => return Err(WeatherFileError::UnknownStatus(self.status)),
        };
        Ok(WeatherSample::new(status, self.valid, &self.condition))
    }
}

/// Parse a snapshot from raw JSON bytes.
pub fn parse_snapshot(data: &[u8]) -> Result<WeatherSample, WeatherFileError> {
    let snapshot: WeatherSnapshot = serde_json::from_slice(data)?;
    snapshot.into_sample()
}

/// Load a snapshot from `path`.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<WeatherSample, WeatherFileError> {
    let data = fs::read(path)?;
    parse_snapshot(&data)
}

/// [`WeatherProvider`] backed by a JSON snapshot file.
///
/// Starts out as [`WeatherStatus::Connecting`] until the first poll.
#[derive(Debug)]
pub struct FileWeather {
    path: PathBuf,
    sample: WeatherSample,
}

impl FileWeather {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            sample: WeatherSample::connecting(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WeatherProvider for FileWeather {
    fn poll(&mut self) {
        match load_snapshot(&self.path) {
            Ok(sample) => {
                debug!(
                    "weather snapshot from {}: {:?} {:?}",
                    self.path.display(),
                    sample.status,
                    sample.label
                );
                self.sample = sample;
            }
            Err(err) => {
                warn!("weather snapshot {} unavailable: {}", self.path.display(), err);
                self.sample = WeatherSample::error();
            }
        }
    }

    fn current(&self) -> &WeatherSample {
        &self.sample
    }
}

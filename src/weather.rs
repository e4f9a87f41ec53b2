//! # Weather Samples and Providers
//!
//! The clock face only reflects the weather; fetching it belongs to a
//! [`WeatherProvider`]. Providers report a status, a validity flag and the
//! raw condition text. The text is decoded into a closed [`Condition`] once,
//! when the sample is built, so the render path matches on an enum and every
//! condition is guaranteed to map to a color, a palette and an icon.
//!
//! Retry and backoff after an error are the provider's business. The face
//! keeps showing the error glyph until the provider reports something else.

/// Connection state reported by the provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherStatus {
    Ok,
    Connecting,
    Error,
}

/// Weather condition, decoded from the provider's label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    Clear,
    Cloudy,
    Rain,
    Drizzle,
    Snow,
    Thunder,
    Fog,
    Overcast,
    Unknown,
}

impl Condition {
    /// Decode a provider label. Case and surrounding whitespace are ignored;
    /// anything unrecognized, including the empty string, is `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "clear" | "sunny" => Condition::Clear,
            "clouds" | "cloudy" | "partly" => Condition::Cloudy,
            "rain" => Condition::Rain,
            "drizzle" => Condition::Drizzle,
            "snow" => Condition::Snow,
            "thunder" | "thunderstorm" => Condition::Thunder,
            "fog" | "mist" | "haze" => Condition::Fog,
            "overcast" => Condition::Overcast,
            _ => Condition::Unknown,
        }
    }
}

impl From<&str> for Condition {
    fn from(label: &str) -> Self {
        Condition::from_label(label)
    }
}

/// One weather reading as seen by the face.
///
/// `is_valid`, `condition` and `label` only mean something while `status`
/// is [`WeatherStatus::Ok`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeatherSample {
    pub status: WeatherStatus,
    pub is_valid: bool,
    pub condition: Condition,
    /// Provider text as received (trimmed), shown on the marquee
    pub label: String,
}

impl WeatherSample {
    /// Build a sample, decoding `label` into a [`Condition`].
    pub fn new(status: WeatherStatus, is_valid: bool, label: &str) -> Self {
        let label = label.trim();
        Self {
            status,
            is_valid,
            condition: Condition::from_label(label),
            label: label.to_string(),
        }
    }

    /// A valid reading.
    pub fn ok(label: &str) -> Self {
        Self::new(WeatherStatus::Ok, true, label)
    }

    pub fn connecting() -> Self {
        Self::new(WeatherStatus::Connecting, false, "")
    }

    pub fn error() -> Self {
        Self::new(WeatherStatus::Error, false, "")
    }

    /// `Some(condition)` only for an `Ok`, valid sample.
    pub fn usable_condition(&self) -> Option<Condition> {
        (self.status == WeatherStatus::Ok && self.is_valid).then_some(self.condition)
    }
}

/// Source of weather readings.
///
/// `poll` refreshes the provider's cached reading and may be slow; the engine
/// calls it on the weather cadence (every five minutes by default). `current`
/// is cheap and is read on every frame.
pub trait WeatherProvider {
    fn poll(&mut self);

    fn current(&self) -> &WeatherSample;
}

impl<W: WeatherProvider + ?Sized> WeatherProvider for &mut W {
    fn poll(&mut self) {
        (**self).poll()
    }

    fn current(&self) -> &WeatherSample {
        (**self).current()
    }
}

impl<W: WeatherProvider + ?Sized> WeatherProvider for Box<W> {
    fn poll(&mut self) {
        (**self).poll()
    }

    fn current(&self) -> &WeatherSample {
        (**self).current()
    }
}

/// Provider holding a fixed reading, replaced only through [`StaticWeather::set`].
#[derive(Clone, Debug)]
pub struct StaticWeather {
    sample: WeatherSample,
    polls: u64,
}

impl StaticWeather {
    pub fn new(sample: WeatherSample) -> Self {
        Self { sample, polls: 0 }
    }

    pub fn set(&mut self, sample: WeatherSample) {
        self.sample = sample;
    }

    /// Number of times the engine polled this provider.
    pub fn polls(&self) -> u64 {
        self.polls
    }
}

impl WeatherProvider for StaticWeather {
    fn poll(&mut self) {
        self.polls += 1;
    }

    fn current(&self) -> &WeatherSample {
        &self.sample
    }
}

//! Wall-clock providers.
//!
//! The face reads one [`TimeSample`] per frame from a [`Clock`]. Setting the
//! time (NTP, RTC) is the provider's concern.

use crate::TimeSample;
use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

/// Source of wall-clock time.
pub trait Clock {
    fn now(&self) -> TimeSample;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> TimeSample {
        (**self).now()
    }
}

/// Local time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimeSample {
        sample_from(&Local::now())
    }
}

/// Clock frozen at a given sample. Used by the preview and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock {
    pub sample: TimeSample,
}

impl FixedClock {
    pub fn new(sample: TimeSample) -> Self {
        Self { sample }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> TimeSample {
        self.sample
    }
}

/// Break a `chrono` timestamp into clock fields.
pub fn sample_from<Tz: TimeZone>(time: &DateTime<Tz>) -> TimeSample {
    TimeSample {
        hour: time.hour() as u8,
        minute: time.minute() as u8,
        second: time.second().min(59) as u8,
        weekday: time.weekday().num_days_from_sunday() as u8,
        day: time.day() as u8,
        month: time.month() as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_sample_from_datetime() {
        // 2025-07-24 was a Thursday.
        let time = NaiveDate::from_ymd_opt(2025, 7, 24)
            .unwrap()
            .and_hms_opt(18, 30, 15)
            .unwrap()
            .and_utc();
        let sample = sample_from(&time);
        assert_eq!(
            sample,
            TimeSample {
                hour: 18,
                minute: 30,
                second: 15,
                weekday: 4,
                day: 24,
                month: 7,
            }
        );
    }

    #[test]
    fn test_system_clock_in_range() {
        let sample = SystemClock.now();
        assert!(sample.hour < 24);
        assert!(sample.minute < 60);
        assert!(sample.second < 60);
        assert!(sample.weekday < 7);
        assert!((1..=12).contains(&sample.month));
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new(TimeSample::hms(6, 30, 0));
        assert_eq!((&clock).now().hour, 6);
    }
}

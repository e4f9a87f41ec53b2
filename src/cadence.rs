//! # Cadence Gates
//!
//! Every periodic job on the face is gated the same way: compare "now minus
//! last run" against a period, on a single monotonic millisecond counter.
//!
//! | cadence        | period     |
//! |----------------|------------|
//! | frame          | 1000 ms    |
//! | weather poll   | 300000 ms  |
//! | marquee scroll | 300 ms     |
//!
//! Gates are independent; a late weather poll never holds up a frame and
//! vice versa. A gate that has never fired is due immediately.

use std::cell::Cell;
use std::time::Instant;

/// Monotonic millisecond counter.
pub trait Monotonic {
    fn now_ms(&self) -> u64;
}

impl<M: Monotonic + ?Sized> Monotonic for &M {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Milliseconds since construction, from [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemMonotonic {
    start: Instant,
}

impl SystemMonotonic {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemMonotonic {
    fn default() -> Self {
        Self::new()
    }
}

impl Monotonic for SystemMonotonic {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Hand-driven counter for simulations and tests.
///
/// Interior mutability lets a test keep advancing time while the engine holds
/// a shared reference.
#[derive(Debug, Default)]
pub struct ManualMonotonic {
    now: Cell<u64>,
}

impl ManualMonotonic {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get().saturating_add(delta_ms));
    }
}

impl Monotonic for ManualMonotonic {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// A fixed-period gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    period_ms: u64,
    last_ms: Option<u64>,
}

impl Cadence {
    pub const fn new(period_ms: u64) -> Self {
        Self {
            period_ms,
            last_ms: None,
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    pub fn last_ms(&self) -> Option<u64> {
        self.last_ms
    }

    /// True when the gate has never fired or a full period has elapsed.
    pub fn is_due(&self, now_ms: u64) -> bool {
        match self.last_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.period_ms,
        }
    }

    /// Record a run at `now_ms`.
    pub fn fire(&mut self, now_ms: u64) {
        self.last_ms = Some(now_ms);
    }

    /// Fire if due; returns whether it did.
    pub fn try_fire(&mut self, now_ms: u64) -> bool {
        if self.is_due(now_ms) {
            self.fire(now_ms);
            true
        } else {
            false
        }
    }

    /// Forget the last run, making the gate due again.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

/// Frame and weather-poll gates owned by the render loop.
///
/// The scroll gate lives with the marquee it drives, see
/// [`crate::marquee::MarqueeState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameClock {
    pub frame: Cadence,
    pub weather_poll: Cadence,
}

impl FrameClock {
    pub const fn new(frame_ms: u64, weather_poll_ms: u64) -> Self {
        Self {
            frame: Cadence::new(frame_ms),
            weather_poll: Cadence::new(weather_poll_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cadence_is_due_before_first_fire() {
        let cadence = Cadence::new(1000);
        assert!(cadence.is_due(0));
        assert_eq!(cadence.last_ms(), None);
    }

    #[test]
    fn test_cadence_waits_full_period() {
        let mut cadence = Cadence::new(1000);
        assert!(cadence.try_fire(5));
        assert!(!cadence.try_fire(500));
        assert!(!cadence.try_fire(1004));
        assert!(cadence.try_fire(1005));
        assert_eq!(cadence.last_ms(), Some(1005));
    }

    #[test]
    fn test_cadence_tolerates_time_going_backwards() {
        let mut cadence = Cadence::new(300);
        cadence.fire(1000);
        assert!(!cadence.is_due(10));
    }

    #[test]
    fn test_cadences_are_independent() {
        let mut clock = FrameClock::new(1000, 300_000);
        assert!(clock.frame.try_fire(0));
        assert!(clock.weather_poll.try_fire(0));

        for second in 1..300 {
            let now = second * 1000;
            assert!(clock.frame.try_fire(now));
            assert!(!clock.weather_poll.try_fire(now));
        }
        assert!(clock.weather_poll.try_fire(300_000));
    }

    #[test]
    fn test_reset_makes_gate_due() {
        let mut cadence = Cadence::new(300);
        cadence.fire(10);
        cadence.reset();
        assert!(cadence.is_due(11));
    }

    #[test]
    fn test_manual_monotonic() {
        let clock = ManualMonotonic::new(100);
        clock.advance(250);
        assert_eq!(clock.now_ms(), 350);
        clock.set(7);
        assert_eq!((&clock).now_ms(), 7);
    }

    #[test]
    fn test_system_monotonic_never_decreases() {
        let clock = SystemMonotonic::new();
        let first = clock.now_ms();
        let second = clock.now_ms();
        assert!(second >= first);
    }
}

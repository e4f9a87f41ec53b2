//! # Clockface Core Library
//!
//! This library renders an analog-style clock face plus an ambient weather
//! indicator onto a fixed 64×64 `Rgb565` pixel surface. It is built for small
//! RGB LED matrices driven by a single-board controller, where a frame has to
//! be painted once per second without heap allocation on the render path.
//!
//! ## Design Philosophy
//!
//! ### Fixed Canvas
//! - **64×64 pixels**: every coordinate in this crate lives in that space; the
//!   drawing primitives clip, the core never bounds-checks on its own
//! - **Rgb565 colors**: 5-6-5 packed colors, blended channel by channel
//!
//! ### Injected Collaborators
//! The engine never reaches for globals. Its constructor takes:
//! - a [`surface::PixelSurface`] (drawing primitives and font metrics)
//! - a [`clock::Clock`] (wall-clock time and calendar fields)
//! - a [`weather::WeatherProvider`] (status, validity and condition)
//! - a [`cadence::Monotonic`] millisecond counter (all cadence gates)
//!
//! ### Data Flow
//! 1. **Gate**: `update()` returns immediately unless the 1000 ms frame cadence is due
//! 2. **Resolve**: weather sample → hand color or gradient palette, icon and label
//! 3. **Paint**: background, second → minute → hour hands, weather icon, marquee
//! 4. **Between frames**: only the marquee rectangle is redrawn, every 300 ms,
//!    and only while its label overflows
//!
//! ## Core Types
//!
//! - [`TimeSample`]: one read-only snapshot of the wall clock per frame
//! - [`weather::WeatherSample`]: one read-only snapshot of the weather per frame

// Module declarations
pub mod angle;
pub mod cadence;
pub mod clock;
pub mod color;
pub mod config;
pub mod engine;
pub mod framebuffer;
pub mod glyphs;
pub mod gradient;
pub mod hands;
pub mod logging;
pub mod marquee;
pub mod preview;
pub mod surface;
pub mod weather;
pub mod weather_file;

pub use engine::{ClockfaceEngine, UpdateOutcome};
pub use weather::{Condition, WeatherSample, WeatherStatus};

use embedded_graphics::prelude::Point;

/// Width and height of the square canvas, in pixels.
pub const CANVAS_SIZE: u32 = 64;

/// Shared center of the three hands.
pub const FACE_CENTER: Point = Point::new(32, 32);

/// Snapshot of the wall clock taken once per frame.
///
/// Values are small integers as reported by the clock provider:
/// - `hour`: 0–23
/// - `minute`, `second`: 0–59
/// - `weekday`: 0–6, 0 = Sunday
/// - `day`: 1–31
/// - `month`: 1–12
///
/// The angle math reduces every field modulo its period, so a provider that
/// reports an out-of-range value still yields a well-defined hand position.
///
/// # Example
/// ```
/// use clockface::TimeSample;
///
/// let half_past_six = TimeSample::hms(6, 30, 0);
/// assert_eq!(half_past_six.minute, 30);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeSample {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub weekday: u8,
    pub day: u8,
    pub month: u8,
}

impl TimeSample {
    /// Time of day only; the calendar fields are set to Sunday, January 1st.
    pub const fn hms(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
            weekday: 0,
            day: 1,
            month: 1,
        }
    }
}

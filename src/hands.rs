//! # Clock Hands
//!
//! Two interchangeable renderings of the same three hands:
//!
//! - **Marker**: a filled dot per hand, placed on the hand's angle at the
//!   hand's length, all in one flat color picked from the weather.
//! - **Gradient**: a conic gradient ring per hand, rotated to the hand's
//!   angle, using an eight-color palette picked from the weather.
//!
//! Both use the same concentric lengths (second 22, minute 16, hour 10) and
//! draw in the same order, second → minute → hour, so the shorter hands stay
//! on top at the shared center.

use crate::angle::{hour_angle, point_on_circle, sixtieth_angle, AngleUnit};
use crate::color::rgb565_from_rgb888;
use crate::gradient::{draw_gradient_ring, GradientSpec};
use crate::surface::PixelSurface;
use crate::weather::{Condition, WeatherSample};
use crate::TimeSample;
use embedded_graphics::{
    pixelcolor::{Rgb565, RgbColor},
    prelude::Point,
};
use serde::{Deserialize, Serialize};

/// Rendering variant for the hands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Marker,
    Gradient,
}

/// The three hands, in draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    Second,
    Minute,
    Hour,
}

impl Hand {
    pub const DRAW_ORDER: [Hand; 3] = [Hand::Second, Hand::Minute, Hand::Hour];

    /// Distance from the center to the marker, and radius of the gradient ring.
    pub const fn length(self) -> u32 {
        match self {
            Hand::Second => 22,
            Hand::Minute => 16,
            Hand::Hour => 10,
        }
    }

    /// Radius of the marker dot.
    pub const fn dot_radius(self) -> u32 {
        match self {
            Hand::Second => 8,
            Hand::Minute => 10,
            Hand::Hour => 12,
        }
    }

    /// Angle of this hand for `time`.
    pub fn angle(self, time: &TimeSample, unit: AngleUnit) -> f32 {
        match self {
            Hand::Second => sixtieth_angle(time.second, unit),
            Hand::Minute => sixtieth_angle(time.minute, unit),
            Hand::Hour => hour_angle(time.hour, time.minute, unit),
        }
    }
}

// Marker palette
const MARKER_CLEAR: Rgb565 = rgb565_from_rgb888(0xFFB347);
const MARKER_CLOUDY: Rgb565 = rgb565_from_rgb888(0xB0E0E6);
const MARKER_RAIN: Rgb565 = rgb565_from_rgb888(0x5F9EA0);
const MARKER_SNOW: Rgb565 = rgb565_from_rgb888(0xFFFAFA);
const MARKER_SKY: Rgb565 = rgb565_from_rgb888(0x87CEEB);

/// Flat marker color for the current weather.
///
/// Without a valid reading the markers are white.
pub fn marker_color(weather: &WeatherSample) -> Rgb565 {
    match weather.usable_condition() {
        None => Rgb565::WHITE,
        Some(Condition::Clear) => MARKER_CLEAR,
        Some(Condition::Cloudy) => MARKER_CLOUDY,
        Some(Condition::Rain) => MARKER_RAIN,
        Some(Condition::Snow) => MARKER_SNOW,
        Some(
            Condition::Drizzle
            | Condition::Thunder
            | Condition::Fog
            | Condition::Overcast
            | Condition::Unknown,
        ) => MARKER_SKY,
    }
}

/// Background plus start/end colors for each gradient hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientPalette {
    pub background: Rgb565,
    pub second: (Rgb565, Rgb565),
    pub minute: (Rgb565, Rgb565),
    pub hour: (Rgb565, Rgb565),
}

impl GradientPalette {
    pub fn colors(&self, hand: Hand) -> (Rgb565, Rgb565) {
        match hand {
            Hand::Second => self.second,
            Hand::Minute => self.minute,
            Hand::Hour => self.hour,
        }
    }
}

pub const CLEAR_PALETTE: GradientPalette = GradientPalette {
    background: rgb565_from_rgb888(0x000814),
    second: (rgb565_from_rgb888(0xFFD166), rgb565_from_rgb888(0xFF6B35)),
    minute: (rgb565_from_rgb888(0xFFB347), rgb565_from_rgb888(0xFF4E50)),
    hour: (rgb565_from_rgb888(0xFFF3B0), rgb565_from_rgb888(0xF77F00)),
};

pub const RAIN_PALETTE: GradientPalette = GradientPalette {
    background: rgb565_from_rgb888(0x020C1B),
    second: (rgb565_from_rgb888(0x5F9EA0), rgb565_from_rgb888(0x1B3B6F)),
    minute: (rgb565_from_rgb888(0x48CAE4), rgb565_from_rgb888(0x023E8A)),
    hour: (rgb565_from_rgb888(0x90E0EF), rgb565_from_rgb888(0x0077B6)),
};

pub const CLOUD_PALETTE: GradientPalette = GradientPalette {
    background: rgb565_from_rgb888(0x0B0B0F),
    second: (rgb565_from_rgb888(0xB0E0E6), rgb565_from_rgb888(0x6C757D)),
    minute: (rgb565_from_rgb888(0xDEE2E6), rgb565_from_rgb888(0x495057)),
    hour: (rgb565_from_rgb888(0xF8F9FA), rgb565_from_rgb888(0xADB5BD)),
};

pub const NEUTRAL_PALETTE: GradientPalette = GradientPalette {
    background: rgb565_from_rgb888(0x101018),
    second: (rgb565_from_rgb888(0x87CEEB), rgb565_from_rgb888(0x4169E1)),
    minute: (rgb565_from_rgb888(0xE6E6FA), rgb565_from_rgb888(0x6A5ACD)),
    hour: (rgb565_from_rgb888(0xFFFFFF), rgb565_from_rgb888(0x9370DB)),
};

/// Gradient palette for the current weather.
pub fn gradient_palette(weather: &WeatherSample) -> GradientPalette {
    match weather.usable_condition() {
        Some(Condition::Clear) => CLEAR_PALETTE,
        Some(Condition::Rain | Condition::Drizzle) => RAIN_PALETTE,
        Some(Condition::Cloudy | Condition::Overcast | Condition::Fog) => CLOUD_PALETTE,
        Some(Condition::Snow | Condition::Thunder | Condition::Unknown) | None => NEUTRAL_PALETTE,
    }
}

/// Marker mode: one dot per hand.
pub fn draw_marker_hands<S: PixelSurface>(
    surface: &mut S,
    center: Point,
    time: &TimeSample,
    color: Rgb565,
) -> Result<(), S::Error> {
    for hand in Hand::DRAW_ORDER {
        let angle = hand.angle(time, AngleUnit::Radians);
        let at = point_on_circle(center, hand.length() as f32, angle, AngleUnit::Radians);
        surface.fill_circle(at, hand.dot_radius(), color)?;
    }
    Ok(())
}

/// Gradient mode: one ring per hand, rotated to the hand's angle.
pub fn draw_gradient_hands<S: PixelSurface>(
    surface: &mut S,
    center: Point,
    time: &TimeSample,
    palette: &GradientPalette,
) -> Result<(), S::Error> {
    for hand in Hand::DRAW_ORDER {
        let (start, end) = palette.colors(hand);
        let spec = GradientSpec::new(start, end, hand.angle(time, AngleUnit::Degrees));
        draw_gradient_ring(surface, center, hand.length(), &spec)?;
    }
    Ok(())
}

/// Draw all three hands in `mode`, colored from `weather`.
pub fn draw_hands<S: PixelSurface>(
    surface: &mut S,
    mode: RenderMode,
    center: Point,
    time: &TimeSample,
    weather: &WeatherSample,
) -> Result<(), S::Error> {
    match mode {
        RenderMode::Marker => draw_marker_hands(surface, center, time, marker_color(weather)),
        RenderMode::Gradient => {
            draw_gradient_hands(surface, center, time, &gradient_palette(weather))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::RecordingSurface;
    use crate::weather::WeatherStatus;
    use crate::FACE_CENTER;

    #[test]
    fn test_lengths_are_distinct_and_ordered() {
        assert!(Hand::Second.length() > Hand::Minute.length());
        assert!(Hand::Minute.length() > Hand::Hour.length());
    }

    #[test]
    fn test_marker_hands_draw_in_order() {
        let mut surface = RecordingSurface::default();
        let time = TimeSample::hms(3, 0, 30);
        draw_marker_hands(&mut surface, FACE_CENTER, &time, Rgb565::WHITE).unwrap();

        let circles = surface.circles();
        assert_eq!(circles.len(), 3);
        // Second at 30 → straight down, 22 px.
        assert_eq!(circles[0], (Point::new(32, 54), 8, Rgb565::WHITE));
        // Minute at 0 → straight up, 16 px.
        assert_eq!(circles[1], (Point::new(32, 16), 10, Rgb565::WHITE));
        // Hour at 3:00 → right, 10 px.
        assert_eq!(circles[2], (Point::new(42, 32), 12, Rgb565::WHITE));
    }

    #[test]
    fn test_gradient_hands_draw_three_rings() {
        let mut surface = RecordingSurface::default();
        let time = TimeSample::hms(9, 15, 45);
        draw_gradient_hands(&mut surface, FACE_CENTER, &time, &CLEAR_PALETTE).unwrap();

        let lines = surface.lines();
        assert_eq!(lines.len(), 3 * 72);
        // The first segment of each ring carries that hand's start color and
        // points along the hand.
        assert_eq!(lines[0].2, CLEAR_PALETTE.second.0);
        assert_eq!(lines[0].1, Point::new(10, 32));
        assert_eq!(lines[72].2, CLEAR_PALETTE.minute.0);
        assert_eq!(lines[72].1, Point::new(48, 32));
        assert_eq!(lines[144].2, CLEAR_PALETTE.hour.0);
    }

    #[test]
    fn test_marker_color_is_total() {
        assert_eq!(marker_color(&WeatherSample::ok("clear")), MARKER_CLEAR);
        assert_eq!(marker_color(&WeatherSample::ok("clouds")), MARKER_CLOUDY);
        assert_eq!(marker_color(&WeatherSample::ok("rain")), MARKER_RAIN);
        assert_eq!(marker_color(&WeatherSample::ok("snow")), MARKER_SNOW);
        assert_eq!(marker_color(&WeatherSample::ok("hail")), MARKER_SKY);
        assert_eq!(marker_color(&WeatherSample::ok("fog")), MARKER_SKY);
        assert_eq!(marker_color(&WeatherSample::error()), Rgb565::WHITE);
        assert_eq!(
            marker_color(&WeatherSample::new(WeatherStatus::Ok, false, "clear")),
            Rgb565::WHITE
        );
    }

    #[test]
    fn test_gradient_palette_buckets() {
        assert_eq!(gradient_palette(&WeatherSample::ok("clear")), CLEAR_PALETTE);
        assert_eq!(gradient_palette(&WeatherSample::ok("rain")), RAIN_PALETTE);
        assert_eq!(gradient_palette(&WeatherSample::ok("drizzle")), RAIN_PALETTE);
        assert_eq!(gradient_palette(&WeatherSample::ok("clouds")), CLOUD_PALETTE);
        assert_eq!(gradient_palette(&WeatherSample::ok("overcast")), CLOUD_PALETTE);
        assert_eq!(gradient_palette(&WeatherSample::ok("fog")), CLOUD_PALETTE);
        assert_eq!(gradient_palette(&WeatherSample::ok("snow")), NEUTRAL_PALETTE);
        assert_eq!(gradient_palette(&WeatherSample::connecting()), NEUTRAL_PALETTE);
        assert_eq!(
            gradient_palette(&WeatherSample::new(WeatherStatus::Ok, false, "clear")),
            NEUTRAL_PALETTE
        );
    }

    #[test]
    fn test_draw_hands_dispatches_on_mode() {
        let time = TimeSample::hms(1, 2, 3);
        let weather = WeatherSample::ok("rain");

        let mut marker = RecordingSurface::default();
        draw_hands(&mut marker, RenderMode::Marker, FACE_CENTER, &time, &weather).unwrap();
        assert_eq!(marker.circles().len(), 3);
        assert!(marker.circles().iter().all(|c| c.2 == MARKER_RAIN));

        let mut gradient = RecordingSurface::default();
        draw_hands(&mut gradient, RenderMode::Gradient, FACE_CENTER, &time, &weather).unwrap();
        assert_eq!(gradient.lines().len(), 216);
    }
}

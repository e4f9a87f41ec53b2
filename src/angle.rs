//! # Time → Angle Mapping
//!
//! Converts clock components into hand angles and hand angles into pixel
//! positions.
//!
//! ## Angle Reference
//! - `0` points up (12 o'clock) and angles increase clockwise
//! - a full turn is either `2π` ([`AngleUnit::Radians`], used by the marker
//!   hands) or `360` ([`AngleUnit::Degrees`], used by the gradient rings)
//! - screen `y` grows downward, so after removing a quarter turn the usual
//!   `cos`/`sin` pair already walks clockwise
//!
//! The hour hand also takes the minute into account so it glides between
//! hour marks instead of jumping once an hour.

use core::f32::consts::TAU;
use embedded_graphics::prelude::Point;

/// Unit an angle is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleUnit {
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Size of one full turn in this unit.
    pub const fn full_turn(self) -> f32 {
        match self {
            AngleUnit::Radians => TAU,
            AngleUnit::Degrees => 360.0,
        }
    }

    fn to_radians(self, angle: f32) -> f32 {
        match self {
            AngleUnit::Radians => angle,
            AngleUnit::Degrees => angle.to_radians(),
        }
    }
}

/// Generic form: `((component mod period) + base) / period` of a full turn.
///
/// `base` is the fractional progress within the current unit (for the hour
/// hand, `minute / 60`).
pub fn angle_for(component: u32, base: f32, period_units: u32, unit: AngleUnit) -> f32 {
    let period = period_units.max(1);
    ((component % period) as f32 + base) / period as f32 * unit.full_turn()
}

/// Hour hand angle on a 12-hour dial, advanced smoothly by the minute.
pub fn hour_angle(hour: u8, minute: u8, unit: AngleUnit) -> f32 {
    let minute_fraction = (minute % 60) as f32 / 60.0;
    angle_for(hour as u32, minute_fraction, 12, unit)
}

/// Minute or second hand angle.
pub fn sixtieth_angle(value: u8, unit: AngleUnit) -> f32 {
    angle_for(value as u32, 0.0, 60, unit)
}

/// Pixel at `radius` from `center` along a clock angle.
pub fn point_on_circle(center: Point, radius: f32, angle: f32, unit: AngleUnit) -> Point {
    let theta = unit.to_radians(angle - unit.full_turn() / 4.0);
    Point::new(
        center.x + (radius * theta.cos()).round() as i32,
        center.y + (radius * theta.sin()).round() as i32,
    )
}

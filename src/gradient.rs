//! # Conic Gradient Rings
//!
//! A gradient hand is a "sunburst": 72 radial lines from the center, one every
//! 5°, each colored by how far round the sweep it sits. The whole sweep is
//! rotated by a phase angle (the hand's current angle), so the seam between
//! the end color and the start color points at the time.
//!
//! The segment count is fixed. 72 line draws per ring keeps a frame well
//! inside its one-second budget on a small controller, and colors are never
//! computed per pixel.

use crate::angle::{point_on_circle, AngleUnit};
use crate::color::interpolate;
use crate::surface::PixelSurface;
use embedded_graphics::{pixelcolor::Rgb565, prelude::Point};

/// Angular width of one segment, degrees.
pub const STEP_DEGREES: u32 = 5;

/// Segments in a full ring.
pub const SEGMENTS: u32 = 360 / STEP_DEGREES;

/// Colors and rotation of one ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientSpec {
    pub start: Rgb565,
    pub end: Rgb565,
    pub phase_degrees: f32,
}

impl GradientSpec {
    pub const fn new(start: Rgb565, end: Rgb565, phase_degrees: f32) -> Self {
        Self {
            start,
            end,
            phase_degrees,
        }
    }
}

/// One segment of the sweep: its starting angle, the angle where the next one
/// begins, and its color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from_degrees: f32,
    pub to_degrees: f32,
    pub color: Rgb565,
}

/// The 72 segments of a ring, in sweep order.
pub fn segments(spec: &GradientSpec) -> impl Iterator<Item = Segment> + '_ {
    (0..SEGMENTS).map(move |n| {
        let i = n * STEP_DEGREES;
        Segment {
            from_degrees: i as f32 + spec.phase_degrees,
            to_degrees: (i + STEP_DEGREES) as f32 + spec.phase_degrees,
            color: interpolate(spec.start, spec.end, i as f32 / 360.0),
        }
    })
}

/// Draw a gradient ring of `radius` around `center`.
///
/// Each segment is a line from the center to the segment's leading edge.
pub fn draw_gradient_ring<S: PixelSurface>(
    surface: &mut S,
    center: Point,
    radius: u32,
    spec: &GradientSpec,
) -> Result<(), S::Error> {
    for segment in segments(spec) {
        let edge = point_on_circle(center, radius as f32, segment.from_degrees, AngleUnit::Degrees);
        surface.draw_line(center, edge, segment.color)?;
    }
    Ok(())
}

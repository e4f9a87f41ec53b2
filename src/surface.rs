//! # Pixel Surface Capability
//!
//! The clock face never talks to a display driver directly. Everything it
//! paints goes through [`PixelSurface`], a small set of primitives: filled
//! rectangle, filled circle, line, single pixel, bitmap blit, text print and
//! text measurement.
//!
//! [`Canvas`] implements the trait for any `embedded-graphics` draw target
//! with `Rgb565` pixels, so the same engine drives a real LED matrix driver,
//! the in-memory [`crate::framebuffer::Framebuffer`] or a `MockDisplay`.

use embedded_graphics::{
    image::{Image, ImageRawBE},
    mono_font::{ascii::FONT_4X6, MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Rectangle},
    text::{renderer::TextRenderer, Baseline, Text},
};

/// A raw big-endian `Rgb565` bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    /// `width * height * 2` bytes, row-major, big-endian pixels
    pub data: &'static [u8],
}

/// Drawing primitives the clock face renders through.
///
/// Coordinates are device pixels on the 64×64 canvas. Implementations clip;
/// callers do no bounds checking of their own.
pub trait PixelSurface {
    type Error: core::fmt::Debug;

    fn fill_rect(&mut self, top_left: Point, size: Size, color: Rgb565) -> Result<(), Self::Error>;

    /// Filled circle covering every pixel within `radius` of `center`.
    fn fill_circle(&mut self, center: Point, radius: u32, color: Rgb565) -> Result<(), Self::Error>;

    fn draw_line(&mut self, from: Point, to: Point, color: Rgb565) -> Result<(), Self::Error>;

    fn draw_pixel(&mut self, at: Point, color: Rgb565) -> Result<(), Self::Error>;

    fn draw_bitmap(&mut self, top_left: Point, bitmap: &Bitmap) -> Result<(), Self::Error>;

    /// Print `text` with `origin` at the bottom-left corner of the text line.
    fn print(&mut self, text: &str, origin: Point, color: Rgb565) -> Result<(), Self::Error>;

    /// Rendered size of `text`, or `None` when no font metrics are available.
    fn measure_text(&self, text: &str) -> Option<Size>;

    /// Height of one text line in pixels.
    fn line_height(&self) -> u32;
}

/// [`PixelSurface`] over an `embedded-graphics` draw target.
pub struct Canvas<D> {
    target: D,
    font: &'static MonoFont<'static>,
}

impl<D> Canvas<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Wrap `target`, printing text with the 4×6 font.
    pub fn new(target: D) -> Self {
        Self::with_font(target, &FONT_4X6)
    }

    pub fn with_font(target: D, font: &'static MonoFont<'static>) -> Self {
        Self { target, font }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }

    fn text_style(&self, color: Rgb565) -> MonoTextStyle<'static, Rgb565> {
        MonoTextStyle::new(self.font, color)
    }
}

impl<D> PixelSurface for Canvas<D>
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: core::fmt::Debug,
{
    type Error = D::Error;

    fn fill_rect(&mut self, top_left: Point, size: Size, color: Rgb565) -> Result<(), Self::Error> {
        Rectangle::new(top_left, size)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target)
    }

    fn fill_circle(&mut self, center: Point, radius: u32, color: Rgb565) -> Result<(), Self::Error> {
        Circle::with_center(center, radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target)
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgb565) -> Result<(), Self::Error> {
        Line::new(from, to)
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut self.target)
    }

    fn draw_pixel(&mut self, at: Point, color: Rgb565) -> Result<(), Self::Error> {
        Pixel(at, color).draw(&mut self.target)
    }

    fn draw_bitmap(&mut self, top_left: Point, bitmap: &Bitmap) -> Result<(), Self::Error> {
        let raw = ImageRawBE::<Rgb565>::new(bitmap.data, bitmap.width);
        Image::new(&raw, top_left).draw(&mut self.target)
    }

    fn print(&mut self, text: &str, origin: Point, color: Rgb565) -> Result<(), Self::Error> {
        Text::with_baseline(text, origin, self.text_style(color), Baseline::Bottom)
            .draw(&mut self.target)
            .map(|_| ())
    }

    fn measure_text(&self, text: &str) -> Option<Size> {
        let metrics = self
            .text_style(Rgb565::WHITE)
            .measure_string(text, Point::zero(), Baseline::Bottom);
        Some(metrics.bounding_box.size)
    }

    fn line_height(&self) -> u32 {
        self.font.character_size.height
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    fn canvas() -> Canvas<MockDisplay<Rgb565>> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        Canvas::new(display)
    }

    #[test]
    fn test_fill_circle_is_centered() {
        let mut canvas = canvas();
        canvas.fill_circle(Point::new(20, 20), 3, Rgb565::RED).unwrap();

        let display = canvas.target();
        assert_eq!(display.get_pixel(Point::new(20, 20)), Some(Rgb565::RED));
        assert_eq!(display.get_pixel(Point::new(23, 20)), Some(Rgb565::RED));
        assert_eq!(display.get_pixel(Point::new(17, 20)), Some(Rgb565::RED));
        assert_eq!(display.get_pixel(Point::new(20, 25)), None);
    }

    #[test]
    fn test_line_and_pixel() {
        let mut canvas = canvas();
        canvas.draw_line(Point::new(0, 0), Point::new(5, 0), Rgb565::GREEN).unwrap();
        canvas.draw_pixel(Point::new(10, 10), Rgb565::BLUE).unwrap();

        let display = canvas.target();
        for x in 0..=5 {
            assert_eq!(display.get_pixel(Point::new(x, 0)), Some(Rgb565::GREEN));
        }
        assert_eq!(display.get_pixel(Point::new(10, 10)), Some(Rgb565::BLUE));
    }

    #[test]
    fn test_measure_text_uses_font_metrics() {
        let canvas = canvas();
        let size = canvas.measure_text("clear").unwrap();
        assert_eq!(size.width, 5 * 4);
        assert_eq!(canvas.line_height(), 6);
        assert_eq!(canvas.measure_text("").unwrap().width, 0);
    }

    #[test]
    fn test_print_sits_on_origin_line() {
        let mut canvas = canvas();
        canvas.print("I", Point::new(0, 10), Rgb565::WHITE).unwrap();

        let display = canvas.target();
        // Nothing is drawn below the origin line.
        for x in 0..4 {
            assert_eq!(display.get_pixel(Point::new(x, 11)), None);
        }
        assert!(display.affected_area().size.height > 0);
    }

    #[test]
    fn test_bitmap_blit() {
        static DATA: [u8; 8] = [0xF8, 0x00, 0x07, 0xE0, 0x00, 0x1F, 0xFF, 0xFF];
        let bitmap = Bitmap {
            width: 2,
            height: 2,
            data: &DATA,
        };
        let mut canvas = canvas();
        canvas.draw_bitmap(Point::new(4, 4), &bitmap).unwrap();

        let display = canvas.target();
        assert_eq!(display.get_pixel(Point::new(4, 4)), Some(Rgb565::RED));
        assert_eq!(display.get_pixel(Point::new(5, 4)), Some(Rgb565::GREEN));
        assert_eq!(display.get_pixel(Point::new(4, 5)), Some(Rgb565::BLUE));
        assert_eq!(display.get_pixel(Point::new(5, 5)), Some(Rgb565::WHITE));
    }
}

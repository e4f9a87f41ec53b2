//! In-memory 64×64 `Rgb565` frame for hosts without a panel attached.
//!
//! The buffer is a plain fixed-size array; drawing into it never allocates.

use crate::CANVAS_SIZE;
use core::convert::Infallible;
use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

const PIXELS: usize = (CANVAS_SIZE * CANVAS_SIZE) as usize;

/// Frame buffer for the 64×64 canvas
#[derive(Clone)]
pub struct Framebuffer {
    pixels: [Rgb565; PIXELS],
}

impl Framebuffer {
    pub fn new() -> Self {
        Self {
            pixels: [Rgb565::BLACK; PIXELS],
        }
    }

    pub fn fill(&mut self, color: Rgb565) {
        self.pixels.fill(color);
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        Self::index(x, y).map(|index| self.pixels[index])
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        if let Some(index) = Self::index(x, y) {
            self.pixels[index] = color;
        }
    }

    /// Number of pixels that are not black.
    pub fn lit_pixels(&self) -> usize {
        self.pixels.iter().filter(|&&c| c != Rgb565::BLACK).count()
    }

    /// Rows of pixels, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb565]> {
        self.pixels.chunks(CANVAS_SIZE as usize)
    }

    fn index(x: i32, y: i32) -> Option<usize> {
        let size = CANVAS_SIZE as i32;
        if x < 0 || y < 0 || x >= size || y >= size {
            return None;
        }
        Some((y * size + x) as usize)
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(CANVAS_SIZE, CANVAS_SIZE)
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

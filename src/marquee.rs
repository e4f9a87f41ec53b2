//! # Scrolling Text Marquee
//!
//! The weather label has a fixed slot (44 px wide by default). A label that
//! fits is printed as is. A longer label scrolls left one character per
//! 300 ms tick, on its own cadence, independent of the 1 Hz frame.
//!
//! ## Scroll Cycle
//! For a label of `len` characters the offset runs `0, 1, …, len + 5` and
//! then wraps to `0`:
//! - `offset < len`: show the tail `text[offset..]`
//! - `offset >= len`: show the head `text[..offset - len]`, so the label
//!   slides off the left edge and reappears from the start, with the short
//!   gap at the wrap point acting as a pause
//!
//! Scrolling starts immediately: offset `0` shows the whole label, clipped
//! by the panel edge.
//!
//! Only the marquee's own rectangle is cleared before drawing, to the
//! marquee's background color; the rest of the frame is left alone.

use crate::cadence::Cadence;
use crate::surface::PixelSurface;
use embedded_graphics::{
    pixelcolor::{Rgb565, RgbColor},
    prelude::{Point, Size},
};

/// Extra ticks past the end of the label before the cycle restarts.
pub const WRAP_PADDING: usize = 5;

/// Default scroll period in milliseconds.
pub const SCROLL_PERIOD_MS: u64 = 300;

/// Scroll position of one marquee region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarqueeState {
    pub scroll_offset: usize,
    pub tick: Cadence,
}

impl MarqueeState {
    pub const fn new(scroll_period_ms: u64) -> Self {
        Self {
            scroll_offset: 0,
            tick: Cadence::new(scroll_period_ms),
        }
    }

    /// Back to the start of the label, with the scroll clock stopped.
    pub fn reset(&mut self) {
        self.scroll_offset = 0;
        self.tick.reset();
    }

    /// Advance one character if the scroll tick is due.
    ///
    /// The first call after a reset only starts the clock, so a freshly
    /// overflowing label is shown from offset 0 for a full period.
    pub fn advance(&mut self, char_len: usize, now_ms: u64) -> bool {
        if self.tick.last_ms().is_none() {
            self.tick.fire(now_ms);
            return false;
        }
        if !self.tick.try_fire(now_ms) {
            return false;
        }
        self.scroll_offset += 1;
        if self.scroll_offset > char_len + WRAP_PADDING {
            self.scroll_offset = 0;
        }
        true
    }
}

/// How the last [`TextMarquee::render`] call drew its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarqueeFrame {
    /// Label fit and was drawn whole.
    Static,
    /// Label overflowed; the window at `offset` was drawn.
    Scrolling { offset: usize },
}

/// A single-line text region that scrolls when its text does not fit.
#[derive(Debug, Clone, Copy)]
pub struct TextMarquee {
    origin: Point,
    max_width: u32,
    background: Rgb565,
    state: MarqueeState,
}

impl TextMarquee {
    /// `origin` is the bottom-left corner of the text line.
    pub const fn new(origin: Point, max_width: u32, scroll_period_ms: u64) -> Self {
        Self {
            origin,
            max_width,
            background: Rgb565::BLACK,
            state: MarqueeState::new(scroll_period_ms),
        }
    }

    /// Color the region is cleared to before each draw. Black until set.
    pub fn set_background(&mut self, color: Rgb565) {
        self.background = color;
    }

    pub fn background(&self) -> Rgb565 {
        self.background
    }

    pub fn state(&self) -> &MarqueeState {
        &self.state
    }

    pub fn scroll_offset(&self) -> usize {
        self.state.scroll_offset
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// True when an overflowing label would move at `now_ms`.
    pub fn tick_due(&self, now_ms: u64) -> bool {
        self.state.tick.is_due(now_ms)
    }

    /// Whether `text` overflows the region. Missing font metrics count as
    /// overflowing.
    pub fn overflows<S: PixelSurface>(&self, surface: &S, text: &str) -> bool {
        match surface.measure_text(text) {
            Some(size) => size.width > self.max_width,
            None => true,
        }
    }

    /// Draw `text`, scrolling it if it does not fit.
    pub fn render<S: PixelSurface>(
        &mut self,
        surface: &mut S,
        text: &str,
        color: Rgb565,
        now_ms: u64,
    ) -> Result<MarqueeFrame, S::Error> {
        if !self.overflows(surface, text) {
            self.state.reset();
            self.clear(surface)?;
            surface.print(text, self.origin, color)?;
            return Ok(MarqueeFrame::Static);
        }

        let char_len = text.chars().count();
        self.state.advance(char_len, now_ms);

        let offset = self.state.scroll_offset;
        self.clear(surface)?;
        surface.print(visible_window(text, offset), self.origin, color)?;
        Ok(MarqueeFrame::Scrolling { offset })
    }

    fn clear<S: PixelSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let height = surface.line_height();
        let top_left = Point::new(self.origin.x, self.origin.y - height as i32 + 1);
        surface.fill_rect(top_left, Size::new(self.max_width, height), self.background)
    }
}

/// Slice of `text` visible at `offset` (in characters).
pub fn visible_window(text: &str, offset: usize) -> &str {
    let len = text.chars().count();
    if offset < len {
        &text[byte_index(text, offset)..]
    } else {
        &text[..byte_index(text, offset - len)]
    }
}

fn byte_index(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(index, _)| index)
}

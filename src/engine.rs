//! # Clock Face Engine
//!
//! [`ClockfaceEngine`] owns its four collaborators (surface, clock, weather
//! provider, monotonic counter) and every piece of mutable render state. The
//! host calls [`ClockfaceEngine::setup`] once and then [`ClockfaceEngine::update`]
//! as often as it likes; the cadence gates decide what actually gets drawn.
//!
//! ## Frame Sequence
//! 1. Read the wall clock once
//! 2. Poll the weather provider if its cadence is due (first frame included)
//! 3. Background: black (marker mode) or palette background plus dithering
//!    noise (gradient mode)
//! 4. Hands, second → minute → hour
//! 5. Weather strip: clear, icon, label through the marquee
//!
//! Between frames only the marquee is redrawn, and only while its label is
//! scrolling.
//!
//! Drawing failures are logged and swallowed. A frame that failed halfway is
//! simply repainted on the next tick.

use crate::cadence::{FrameClock, Monotonic};
use crate::clock::Clock;
use crate::color::darken;
use crate::config::Config;
use crate::glyphs::{self, Glyph, GLYPH_SIZE};
use crate::hands::{draw_hands, gradient_palette, RenderMode};
use crate::marquee::{MarqueeFrame, TextMarquee};
use crate::surface::PixelSurface;
use crate::weather::{WeatherProvider, WeatherSample};
use crate::{CANVAS_SIZE, FACE_CENTER};
use embedded_graphics::{
    pixelcolor::{Rgb565, RgbColor},
    prelude::{Point, Size},
};
use log::{debug, trace, warn};
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// What a call to [`ClockfaceEngine::update`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Nothing was due.
    Idle,
    /// A full frame was painted.
    Frame,
    /// Only the scrolling label was redrawn.
    Marquee,
}

/// Layout and behavior fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineSettings {
    pub mode: RenderMode,
    pub noise_pixels: u32,
    pub icon_origin: Point,
    pub marquee_origin: Point,
    pub marquee_width: u32,
}

impl From<&Config> for EngineSettings {
    fn from(config: &Config) -> Self {
        Self {
            mode: config.face.mode,
            noise_pixels: config.face.noise_pixels,
            icon_origin: Point::new(config.marquee.icon_x, config.marquee.icon_y),
            marquee_origin: Point::new(config.marquee.x, config.marquee.y),
            marquee_width: config.marquee.max_width,
        }
    }
}

/// All mutable render state.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub frames: FrameClock,
    pub marquee: TextMarquee,
    pub frames_rendered: u64,
    /// Whether the last frame left an overflowing label on screen.
    pub marquee_scrolling: bool,
    rng: SmallRng,
}

/// The clock face renderer.
pub struct ClockfaceEngine<S, C, W, M> {
    surface: S,
    clock: C,
    weather: W,
    monotonic: M,
    settings: EngineSettings,
    state: RenderState,
}

impl<S, C, W, M> ClockfaceEngine<S, C, W, M>
where
    S: PixelSurface,
    C: Clock,
    W: WeatherProvider,
    M: Monotonic,
{
    pub fn new(surface: S, clock: C, weather: W, monotonic: M, config: &Config) -> Self {
        let settings = EngineSettings::from(config);
        let state = RenderState {
            frames: FrameClock::new(config.cadence.frame_ms, config.cadence.weather_poll_ms),
            marquee: TextMarquee::new(
                settings.marquee_origin,
                settings.marquee_width,
                config.cadence.scroll_ms,
            ),
            frames_rendered: 0,
            marquee_scrolling: false,
            rng: SmallRng::from_entropy(),
        };
        debug!("engine created: {:?}", settings);
        Self {
            surface,
            clock,
            weather,
            monotonic,
            settings,
            state,
        }
    }

    /// Seed the noise generator, for reproducible frames.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.state.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Clear the whole canvas.
    pub fn setup(&mut self) {
        let size = Size::new(CANVAS_SIZE, CANVAS_SIZE);
        if let Err(e) = self.surface.fill_rect(Point::zero(), size, Rgb565::BLACK) {
            warn!("setup clear failed: {:?}", e);
        }
    }

    /// Run whatever is due at the current monotonic time.
    pub fn update(&mut self) -> UpdateOutcome {
        let now = self.monotonic.now_ms();

        if self.state.frames.frame.try_fire(now) {
            self.render_frame(now);
            return UpdateOutcome::Frame;
        }

        if self.state.marquee_scrolling && self.state.marquee.tick_due(now) {
            self.render_label(now);
            return UpdateOutcome::Marquee;
        }

        UpdateOutcome::Idle
    }

    fn render_frame(&mut self, now: u64) {
        let time = self.clock.now();

        if self.state.frames.weather_poll.try_fire(now) {
            debug!("polling weather at {} ms", now);
            self.weather.poll();
        }

        let Self {
            surface,
            weather,
            settings,
            state,
            ..
        } = self;
        let sample = weather.current();
        let background = background_color(settings.mode, sample);
        state.marquee.set_background(background);

        if let Err(e) = paint_background(surface, settings, background, &mut state.rng) {
            warn!("background draw failed: {:?}", e);
        }
        if let Err(e) = draw_hands(surface, settings.mode, FACE_CENTER, &time, sample) {
            warn!("hand draw failed: {:?}", e);
        }
        let icon = glyphs::select(sample).icon;
        if let Err(e) = draw_weather_icon(surface, settings.icon_origin, background, icon) {
            warn!("weather icon draw failed: {:?}", e);
        }
        draw_label(surface, state, sample, now);

        state.frames_rendered += 1;
        trace!(
            "frame {} at {:02}:{:02}:{:02}",
            state.frames_rendered,
            time.hour,
            time.minute,
            time.second
        );
    }

    fn render_label(&mut self, now: u64) {
        let Self {
            surface,
            weather,
            state,
            ..
        } = self;
        draw_label(surface, state, weather.current(), now);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn weather(&self) -> &W {
        &self.weather
    }

    pub fn weather_mut(&mut self) -> &mut W {
        &mut self.weather
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn frames_rendered(&self) -> u64 {
        self.state.frames_rendered
    }
}

/// Face background: black for markers, the palette background for rings.
fn background_color(mode: RenderMode, sample: &WeatherSample) -> Rgb565 {
    match mode {
        RenderMode::Marker => Rgb565::BLACK,
        RenderMode::Gradient => gradient_palette(sample).background,
    }
}

fn paint_background<S: PixelSurface>(
    surface: &mut S,
    settings: &EngineSettings,
    background: Rgb565,
    rng: &mut SmallRng,
) -> Result<(), S::Error> {
    let size = Size::new(CANVAS_SIZE, CANVAS_SIZE);
    surface.fill_rect(Point::zero(), size, background)?;
    match settings.mode {
        RenderMode::Marker => Ok(()),
        RenderMode::Gradient => {
            for _ in 0..settings.noise_pixels {
                let at = Point::new(
                    rng.gen_range(0..CANVAS_SIZE as i32),
                    rng.gen_range(0..CANVAS_SIZE as i32),
                );
                surface.draw_pixel(at, darken(background, rng.gen_range(0.0..1.0)))?;
            }
            Ok(())
        }
    }
}

fn draw_weather_icon<S: PixelSurface>(
    surface: &mut S,
    origin: Point,
    background: Rgb565,
    icon: Option<Glyph>,
) -> Result<(), S::Error> {
    let strip = Size::new(CANVAS_SIZE.saturating_sub(origin.x.max(0) as u32), GLYPH_SIZE);
    surface.fill_rect(origin, strip, background)?;
    match icon {
        Some(glyph) => surface.draw_bitmap(origin, &glyph.bitmap()),
        None => Ok(()),
    }
}

fn draw_label<S: PixelSurface>(
    surface: &mut S,
    state: &mut RenderState,
    sample: &WeatherSample,
    now: u64,
) {
    let Some(text) = glyphs::select(sample).text else {
        state.marquee.reset();
        state.marquee_scrolling = false;
        return;
    };

    match state.marquee.render(surface, text, Rgb565::WHITE, now) {
        Ok(frame) => state.marquee_scrolling = matches!(frame, MarqueeFrame::Scrolling { .. }),
        Err(e) => {
            warn!("marquee draw failed: {:?}", e);
            state.marquee_scrolling = false;
        }
    }
}

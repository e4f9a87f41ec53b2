//! # Clockface Application Entry Point
//!
//! Host binary for the clock face. It renders into an in-memory 64×64
//! framebuffer on a single-threaded tokio loop and can print every frame as
//! ASCII art, which is how the face is checked on a development machine.
//!
//! ## Usage
//! ```text
//! clockface [--stdout] [--frames N] [--gradient | --marker]
//!           [--condition LABEL] [--time HH:MM:SS] [--config PATH]
//! ```

// Test modules
#[cfg(test)]
mod tests;

use anyhow::{bail, Context};
use clockface::cadence::SystemMonotonic;
use clockface::clock::{Clock, FixedClock, SystemClock};
use clockface::config::{Config, CONFIG_FILE};
use clockface::framebuffer::Framebuffer;
use clockface::hands::RenderMode;
use clockface::logging::init_logging;
use clockface::preview::draw_ascii;
use clockface::surface::Canvas;
use clockface::weather::{StaticWeather, WeatherProvider};
use clockface::weather_file::FileWeather;
use clockface::{ClockfaceEngine, TimeSample, UpdateOutcome, WeatherSample};
use log::{debug, info};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// How often the loop wakes up to check the cadences.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Command line options.
#[derive(Debug, Default, PartialEq)]
struct Options {
    /// Print each frame as ASCII art
    stdout: bool,
    /// Stop after this many full frames
    frames: Option<u64>,
    mode: Option<RenderMode>,
    /// Fixed weather label, overriding the configured source
    condition: Option<String>,
    /// Frozen wall-clock time
    time: Option<TimeSample>,
    config: Option<PathBuf>,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<Options> {
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--stdout" => options.stdout = true,
            "--gradient" => options.mode = Some(RenderMode::Gradient),
            "--marker" => options.mode = Some(RenderMode::Marker),
            "--frames" => {
                let value = args.next().context("--frames needs a count")?;
                options.frames = Some(value.parse().with_context(|| format!("bad frame count {value:?}"))?);
            }
            "--condition" => {
                options.condition = Some(args.next().context("--condition needs a label")?);
            }
            "--time" => {
                let value = args.next().context("--time needs HH:MM:SS")?;
                options.time = Some(parse_time(&value)?);
            }
            "--config" => {
                options.config = Some(PathBuf::from(args.next().context("--config needs a path")?));
            }
            other => bail!("unknown argument {other:?}"),
        }
    }

    Ok(options)
}

/// Parse `HH:MM` or `HH:MM:SS`.
fn parse_time(value: &str) -> anyhow::Result<TimeSample> {
    let fields = value
        .split(':')
        .map(|field| field.parse::<u8>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("bad time {value:?}"))?;

    match fields.as_slice() {
        [hour, minute] if *hour < 24 && *minute < 60 => Ok(TimeSample::hms(*hour, *minute, 0)),
        [hour, minute, second] if *hour < 24 && *minute < 60 && *second < 60 => {
            Ok(TimeSample::hms(*hour, *minute, *second))
        }
        _ => bail!("bad time {value:?}, expected HH:MM[:SS]"),
    }
}

/// Pick the weather source: command line label, configured snapshot file,
/// configured label, or a connecting placeholder, in that order.
fn weather_provider(options: &Options, config: &Config) -> Box<dyn WeatherProvider> {
    if let Some(label) = &options.condition {
        return Box::new(StaticWeather::new(WeatherSample::ok(label)));
    }
    if let Some(path) = &config.weather.snapshot {
        info!("reading weather from {}", path.display());
        return Box::new(FileWeather::new(path.clone()));
    }
    match &config.weather.condition {
        Some(label) => Box::new(StaticWeather::new(WeatherSample::ok(label))),
        None => Box::new(StaticWeather::new(WeatherSample::connecting())),
    }
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    let options = parse_args(env::args().skip(1))?;

    let mut config = match &options.config {
        Some(path) => Config::try_load_from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::load_from_path(CONFIG_FILE),
    };
    if let Some(mode) = options.mode {
        config.face.mode = mode;
    }

    init_logging(&config.logging);
    debug!("options: {:?}", options);

    let clock: Box<dyn Clock> = match options.time {
        Some(time) => Box::new(FixedClock::new(time)),
        None => Box::new(SystemClock),
    };
    let monotonic = SystemMonotonic::new();

    let mut engine = ClockfaceEngine::new(
        Canvas::new(Framebuffer::new()),
        clock.as_ref(),
        weather_provider(&options, &config),
        monotonic,
        &config,
    );
    engine.setup();

    // Single-threaded runtime: the engine is not Send and needs no workers
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    rt.block_on(async {
        let mut ticker = tokio::time::interval(POLL_INTERVAL);
        loop {
            ticker.tick().await;

            match engine.update() {
                UpdateOutcome::Frame => {
                    if options.stdout {
                        draw_ascii(engine.surface().target());
                        println!();
                    }
                    if options.frames.is_some_and(|limit| engine.frames_rendered() >= limit) {
                        break;
                    }
                }
                UpdateOutcome::Marquee | UpdateOutcome::Idle => {}
            }
        }
    });

    info!("rendered {} frames", engine.frames_rendered());
    Ok(())
}

//! # Weather Glyphs
//!
//! Picks the 8×8 icon and the label shown in the weather strip at the bottom
//! of the face.
//!
//! | status      | valid + label | icon                      | text        |
//! |-------------|---------------|---------------------------|-------------|
//! | Ok          | yes           | by condition, or none     | label       |
//! | Ok          | no            | none                      | none        |
//! | Connecting  | –             | cloudy                    | `...`       |
//! | Error       | –             | cloudy                    | `error`     |
//!
//! Icons are compiled into flash as big-endian `Rgb565` bitmaps painted from
//! ASCII art at build time.

use crate::color::pack_rgb888;
use crate::surface::Bitmap;
use crate::weather::{Condition, WeatherSample, WeatherStatus};

/// Icon edge length in pixels.
pub const GLYPH_SIZE: u32 = 8;

const GLYPH_BYTES: usize = (GLYPH_SIZE * GLYPH_SIZE * 2) as usize;

/// Placeholder text while the provider is connecting.
pub const CONNECTING_TEXT: &str = "...";
/// Text shown while the provider reports an error.
pub const ERROR_TEXT: &str = "error";

/// Weather icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Clear,
    Cloudy,
    Rain,
    Thunder,
    Snow,
    Fog,
}

impl Glyph {
    /// Icon for a decoded condition; `Unknown` has none.
    pub fn for_condition(condition: Condition) -> Option<Glyph> {
        match condition {
            Condition::Clear => Some(Glyph::Clear),
            Condition::Cloudy | Condition::Overcast => Some(Glyph::Cloudy),
            Condition::Rain | Condition::Drizzle => Some(Glyph::Rain),
            Condition::Thunder => Some(Glyph::Thunder),
            Condition::Snow => Some(Glyph::Snow),
            Condition::Fog => Some(Glyph::Fog),
            Condition::Unknown => None,
        }
    }

    pub fn bitmap(self) -> Bitmap {
        let data: &'static [u8; GLYPH_BYTES] = match self {
            Glyph::Clear => &CLEAR,
            Glyph::Cloudy => &CLOUDY,
            Glyph::Rain => &RAIN,
            Glyph::Thunder => &THUNDER,
            Glyph::Snow => &SNOW,
            Glyph::Fog => &FOG,
        };
        Bitmap {
            width: GLYPH_SIZE,
            height: GLYPH_SIZE,
            data,
        }
    }
}

/// What the weather strip should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphSelection<'a> {
    pub icon: Option<Glyph>,
    pub text: Option<&'a str>,
}

/// Resolve a weather sample into an icon and display text.
///
/// Total over every status/validity/label combination.
pub fn select(sample: &WeatherSample) -> GlyphSelection<'_> {
    match sample.status {
        WeatherStatus::Ok if sample.is_valid && !sample.label.is_empty() => GlyphSelection {
            icon: Glyph::for_condition(sample.condition),
            text: Some(sample.label.as_str()),
        },
        WeatherStatus::Ok => GlyphSelection {
            icon: None,
            text: None,
        },
        WeatherStatus::Connecting => GlyphSelection {
            icon: Some(Glyph::Cloudy),
            text: Some(CONNECTING_TEXT),
        },
        WeatherStatus::Error => GlyphSelection {
            icon: Some(Glyph::Cloudy),
            text: Some(ERROR_TEXT),
        },
    }
}

// Icon art: '#' primary, '+' secondary, anything else black.

const fn paint(rows: [&[u8; 8]; 8], primary: u32, secondary: u32) -> [u8; GLYPH_BYTES] {
    let primary = pack_rgb888(primary);
    let secondary = pack_rgb888(secondary);
    let mut out = [0u8; GLYPH_BYTES];
    let mut y = 0;
    while y < 8 {
        let mut x = 0;
        while x < 8 {
            let raw = match rows[y][x] {
                b'#' => primary,
                b'+' => secondary,
                _ => 0,
            };
            let i = (y * 8 + x) * 2;
            out[i] = (raw >> 8) as u8;
            out[i + 1] = raw as u8;
            x += 1;
        }
        y += 1;
    }
    out
}

static CLEAR: [u8; GLYPH_BYTES] = paint(
    [
        b"+..+..+.",
        b".+.##.+.",
        b"..####..",
        b"+######+",
        b".######.",
        b"..####..",
        b".+.##.+.",
        b"+..+..+.",
    ],
    0xFFD700,
    0xFF8C00,
);

static CLOUDY: [u8; GLYPH_BYTES] = paint(
    [
        b"........",
        b"...##...",
        b"..####..",
        b".######.",
        b"########",
        b"++++++++",
        b"........",
        b"........",
    ],
    0xDCDCDC,
    0x808080,
);

static RAIN: [u8; GLYPH_BYTES] = paint(
    [
        b"...##...",
        b"..####..",
        b".######.",
        b"########",
        b"........",
        b".+..+..+",
        b"+..+..+.",
        b"........",
    ],
    0xA9A9A9,
    0x1E90FF,
);

static THUNDER: [u8; GLYPH_BYTES] = paint(
    [
        b"...##...",
        b"..####..",
        b".######.",
        b"########",
        b"...++...",
        b"..++....",
        b"...++...",
        b"....+...",
    ],
    0x696969,
    0xFFFF00,
);

static SNOW: [u8; GLYPH_BYTES] = paint(
    [
        b"...#....",
        b".#.#.#..",
        b"..###...",
        b"#######.",
        b"..###...",
        b".#.#.#..",
        b"...#....",
        b"........",
    ],
    0xFFFAFA,
    0xFFFAFA,
);

static FOG: [u8; GLYPH_BYTES] = paint(
    [
        b"........",
        b"######..",
        b"........",
        b"..######",
        b"........",
        b"++++++..",
        b"........",
        b"..++++++",
    ],
    0xC0C0C0,
    0x8C8C8C,
);

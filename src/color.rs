//! # Packed Color Arithmetic
//!
//! Colors on the panel are 16-bit `Rgb565` values: 5 bits red, 6 bits green,
//! 5 bits blue. Blending the packed `u16` as a scalar lets a carry from one
//! field bleed into the next, so every routine here splits the channels,
//! works on them independently and packs them back.
//!
//! Palette literals are written as 24-bit `0xRRGGBB` web colors and truncated
//! to 5-6-5 at compile time with [`rgb565_from_rgb888`].

use embedded_graphics::pixelcolor::{IntoStorage, Rgb565, RgbColor};

/// Linearly blend `a` towards `b` by `t`.
///
/// Each channel is blended on its own bit width, rounded, and clamped to its
/// range. `t` is clamped to `[0, 1]`; NaN is treated as `0`.
///
/// # Example
/// ```
/// use clockface::color::interpolate;
/// use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
///
/// assert_eq!(interpolate(Rgb565::RED, Rgb565::BLUE, 0.0), Rgb565::RED);
/// assert_eq!(interpolate(Rgb565::RED, Rgb565::BLUE, 1.0), Rgb565::BLUE);
/// ```
pub fn interpolate(a: Rgb565, b: Rgb565, t: f32) -> Rgb565 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    Rgb565::new(
        blend_channel(a.r(), b.r(), t, Rgb565::MAX_R),
        blend_channel(a.g(), b.g(), t, Rgb565::MAX_G),
        blend_channel(a.b(), b.b(), t, Rgb565::MAX_B),
    )
}

/// Blend `color` towards black by `t`. Used for the background dithering.
pub fn darken(color: Rgb565, t: f32) -> Rgb565 {
    interpolate(color, Rgb565::BLACK, t)
}

fn blend_channel(a: u8, b: u8, t: f32, max: u8) -> u8 {
    let value = a as f32 + (b as f32 - a as f32) * t;
    value.round().clamp(0.0, max as f32) as u8
}

/// Truncate a 24-bit `0xRRGGBB` color to its raw 5-6-5 encoding.
pub const fn pack_rgb888(rgb: u32) -> u16 {
    let r = ((rgb >> 16) & 0xFF) as u16 >> 3;
    let g = ((rgb >> 8) & 0xFF) as u16 >> 2;
    let b = (rgb & 0xFF) as u16 >> 3;
    (r << 11) | (g << 5) | b
}

/// Decode a raw 5-6-5 value into its channels.
pub const fn unpack(raw: u16) -> Rgb565 {
    Rgb565::new(
        ((raw >> 11) & 0x1F) as u8,
        ((raw >> 5) & 0x3F) as u8,
        (raw & 0x1F) as u8,
    )
}

/// Raw 5-6-5 encoding of `color`.
pub fn pack(color: Rgb565) -> u16 {
    color.into_storage()
}

/// `0xRRGGBB` → `Rgb565`, usable in `const` palettes.
pub const fn rgb565_from_rgb888(rgb: u32) -> Rgb565 {
    unpack(pack_rgb888(rgb))
}

/// Rough perceived brightness in `[0, 1]`, used by the ASCII preview.
pub fn luminance(color: Rgb565) -> f32 {
    let r = color.r() as f32 / Rgb565::MAX_R as f32;
    let g = color.g() as f32 / Rgb565::MAX_G as f32;
    let b = color.b() as f32 / Rgb565::MAX_B as f32;
    0.299 * r + 0.587 * g + 0.114 * b
}

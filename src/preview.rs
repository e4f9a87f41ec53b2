//! # Terminal Preview
//!
//! Renders a [`Framebuffer`] as ASCII art so the face can be checked on a
//! development machine without a panel attached. Each pixel becomes two
//! characters (terminal cells are roughly twice as tall as wide), picked from
//! a brightness ramp.

use crate::color::luminance;
use crate::framebuffer::Framebuffer;

/// Dark to bright.
const RAMP: &[u8] = b" .:-=+*#%@";

/// Render `frame` to a string, one line per pixel row.
pub fn render_ascii(frame: &Framebuffer) -> String {
    let mut out = String::with_capacity(64 * (64 * 2 + 1));
    for row in frame.rows() {
        for &color in row {
            let level = luminance(color);
            let index = ((level * (RAMP.len() - 1) as f32).round() as usize).min(RAMP.len() - 1);
            let ch = RAMP[index] as char;
            out.push(ch);
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Print `frame` to stdout.
pub fn draw_ascii(frame: &Framebuffer) {
    print!("{}", render_ascii(frame));
}

//! Maps scores onto chart positions and colors.

use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{CompassError, Result};

/// Half the marker size, in percent, so the marker is centered on its point.
pub const MARKER_OFFSET: f64 = 2.5;

/// Low end of the political gradient, `#d92372`.
pub const POLITICAL_START: [u8; 3] = [0xd9, 0x23, 0x72];
/// High end of the political gradient, `#33d927`.
pub const POLITICAL_END: [u8; 3] = [0x33, 0xd9, 0x27];

/// Position on the chart as CSS-style percentages of the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayCoordinate {
    pub left: f64,
    pub top: f64,
}

impl DisplayCoordinate {
    pub fn left_css(&self) -> String {
        format!("{}%", self.left)
    }

    pub fn top_css(&self) -> String {
        format!("{}%", self.top)
    }
}

/// Maps `(x, y)` in [-1, 1] to chart percentages with the default marker offset.
///
/// `(-1, 1)` is the top-left corner and `(1, -1)` the bottom-right. Values
/// outside [-1, 1] are not clamped.
pub fn to_display_coordinate(x: f64, y: f64) -> DisplayCoordinate {
    to_display_coordinate_with_offset(x, y, MARKER_OFFSET)
}

pub fn to_display_coordinate_with_offset(x: f64, y: f64, offset: f64) -> DisplayCoordinate {
    let left = (x + 1.0) / 2.0 * 100.0 - offset;
    // y grows upwards, top grows downwards
    let top = (1.0 - y) / 2.0 * 100.0 - offset;
    DisplayCoordinate { left, top }
}

/// Parses `#rgb` or `#rrggbb` (the `#` is optional).
pub fn parse_hex_color(hex: &str) -> Result<Srgb<u8>> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let well_formed =
        matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
    if !well_formed {
        return Err(CompassError::invalid_argument(format!(
            "malformed hex color '{hex}'"
        )));
    }
    Srgb::<u8>::from_str(digits)
        .map_err(|e| CompassError::invalid_argument(format!("malformed hex color '{hex}': {e}")))
}

/// Encodes as `#rrggbb`, lowercase.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Linear per-channel blend. `t` is not clamped, so values outside [0, 1]
/// extrapolate; channels that leave 0..=255 saturate when encoded.
pub fn interpolate_rgb(a: Srgb<u8>, b: Srgb<u8>, t: f64) -> Srgb<u8> {
    Srgb::<u8>::new(
        lerp_channel(a.red, b.red, t),
        lerp_channel(a.green, b.green, t),
        lerp_channel(a.blue, b.blue, t),
    )
}

/// Blends two hex colors and returns `#rrggbb`.
///
/// `t` is not clamped. Outside [0, 1] the blend extrapolates, and any channel
/// that would leave 0..=255 is clipped to fit its two hex digits.
pub fn interpolate_color(color_a: &str, color_b: &str, t: f64) -> Result<String> {
    let a = parse_hex_color(color_a)?;
    let b = parse_hex_color(color_b)?;
    Ok(to_hex(interpolate_rgb(a, b, t)))
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let a = f64::from(a);
    let value = a + (f64::from(b) - a) * t;
    // half-up rounding; the float-to-int cast saturates
    (value + 0.5).floor() as u8
}

/// Two-stop color gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub start: Srgb<u8>,
    pub end: Srgb<u8>,
}

impl Gradient {
    pub fn new(start: Srgb<u8>, end: Srgb<u8>) -> Self {
        Self { start, end }
    }

    pub fn from_hex(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(parse_hex_color(start)?, parse_hex_color(end)?))
    }

    /// Red-magenta to green.
    pub fn political() -> Self {
        Self::new(rgb(POLITICAL_START), rgb(POLITICAL_END))
    }

    pub fn at(&self, t: f64) -> String {
        to_hex(interpolate_rgb(self.start, self.end, t))
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::political()
    }
}

fn rgb([red, green, blue]: [u8; 3]) -> Srgb<u8> {
    Srgb::<u8>::new(red, green, blue)
}

/// Color for a percentage in [0, 1] on the political gradient.
pub fn political_color(percentage: f64) -> String {
    Gradient::political().at(percentage)
}

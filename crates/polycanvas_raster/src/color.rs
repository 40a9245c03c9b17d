//! RGB color with CSS-style hex notation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RasterError;

/// An opaque RGB color. Opacity is always carried separately.
///
/// Serialized as a `#rrggbb` string so configuration and scene files stay
/// readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const GRAY: Color = Color::rgb(0x99, 0x99, 0x99);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or the short `#rgb` form. The leading `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self, RasterError> {
        let hex = s.trim().trim_start_matches('#');
        let parse = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| RasterError::ColorParse(s.to_string()))
        };

        match hex.len() {
            6 if hex.is_ascii() => Ok(Self::rgb(
                parse(&hex[0..2])?,
                parse(&hex[2..4])?,
                parse(&hex[4..6])?,
            )),
            3 if hex.is_ascii() => {
                let r = parse(&hex[0..1])?;
                let g = parse(&hex[1..2])?;
                let b = parse(&hex[2..3])?;
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            _ => Err(RasterError::ColorParse(s.to_string())),
        }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub(crate) fn to_skia(self, opacity: f32) -> tiny_skia::Color {
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, alpha)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = RasterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

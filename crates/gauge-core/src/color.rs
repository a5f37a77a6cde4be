// File: crates/gauge-core/src/color.rs
// Summary: ARGB color value, hex/named parsing and the default band palette.

use std::fmt;
use std::str::FromStr;

use crate::error::GaugeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_rgb(0xff, 0xff, 0xff);
    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);

    /// Band green, also the default pointer/detail/button color.
    pub const GOOD: Color = Color::from_rgb(0x31, 0xdf, 0x6f);
    pub const FAIR: Color = Color::from_rgb(0xf4, 0xc0, 0x40);
    pub const POOR: Color = Color::from_rgb(0xe5, 0x52, 0x32);
    /// Default button label color (deep indigo).
    pub const BUTTON_TEXT: Color = Color::from_rgb(0x1f, 0x1c, 0x5f);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xff, r, g, b)
    }

    pub const fn from_argb_u32(v: u32) -> Self {
        Self::from_argb((v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    /// Parse `#RRGGBB`, `#AARRGGBB` or a named color (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, GaugeError> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(GaugeError::InvalidColor(s.to_string()));
            }
            let v = u32::from_str_radix(hex, 16).map_err(|_| GaugeError::InvalidColor(s.to_string()))?;
            return match hex.len() {
                6 => Ok(Self::from_argb_u32(0xff00_0000 | v)),
                8 => Ok(Self::from_argb_u32(v)),
                _ => Err(GaugeError::InvalidColor(s.to_string())),
            };
        }
        named(s).ok_or_else(|| GaugeError::InvalidColor(s.to_string()))
    }
}

impl FromStr for Color {
    type Err = GaugeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Color::parse(s) }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xff {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

fn named(name: &str) -> Option<Color> {
    let rgb = match name.to_ascii_lowercase().as_str() {
        "black" => 0x000000,
        "darkgray" | "darkgrey" => 0x444444,
        "gray" | "grey" => 0x888888,
        "lightgray" | "lightgrey" => 0xcccccc,
        "white" => 0xffffff,
        "red" => 0xff0000,
        "green" => 0x00ff00,
        "blue" => 0x0000ff,
        "yellow" => 0xffff00,
        "cyan" | "aqua" => 0x00ffff,
        "magenta" | "fuchsia" => 0xff00ff,
        "lime" => 0x00ff00,
        "maroon" => 0x800000,
        "navy" => 0x000080,
        "olive" => 0x808000,
        "purple" => 0x800080,
        "silver" => 0xc0c0c0,
        "teal" => 0x008080,
        "transparent" => return Some(Color::TRANSPARENT),
        _ => return None,
    };
    Some(Color::from_argb_u32(0xff00_0000 | rgb))
}

// File: crates/plotgrid-core/src/types.rs
// Summary: Shared types and constants (colors, tick count, style defaults).

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Number of ticks every axis derives, independent of its sample count.
pub const TICK_COUNT: usize = 5;

/// Default axis tick length, in axis-relative units.
pub const DEFAULT_TICK_LENGTH: f32 = 0.02;
/// Default axis tick width, in axis-relative units.
pub const DEFAULT_TICK_WIDTH: f32 = 0.005;
/// Default distance between an axis and its label.
pub const DEFAULT_LABEL_OFFSET: f32 = 0.1;

/// Straight-alpha RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const GRAY: Rgba = Rgba::rgb(128, 128, 128);
    pub const RED: Rgba = Rgba::rgb(255, 0, 0);
    pub const GREEN: Rgba = Rgba::rgb(0, 128, 0);
    pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Look up a matplotlib-style color name (case-insensitive).
    pub fn named(name: &str) -> Option<Self> {
        let c = match name.trim().to_ascii_lowercase().as_str() {
            "black" | "k" => Self::BLACK,
            "white" | "w" => Self::WHITE,
            "gray" | "grey" => Self::GRAY,
            "lightgray" | "lightgrey" => Self::rgb(211, 211, 211),
            "darkgray" | "darkgrey" => Self::rgb(169, 169, 169),
            "red" | "r" => Self::RED,
            "green" | "g" => Self::GREEN,
            "blue" | "b" => Self::BLUE,
            "cyan" | "c" => Self::rgb(0, 191, 191),
            "magenta" | "m" => Self::rgb(191, 0, 191),
            "yellow" | "y" => Self::rgb(191, 191, 0),
            "orange" => Self::rgb(255, 165, 0),
            "purple" => Self::rgb(128, 0, 128),
            "brown" => Self::rgb(165, 42, 42),
            "pink" => Self::rgb(255, 192, 203),
            "navy" => Self::rgb(0, 0, 128),
            "teal" => Self::rgb(0, 128, 128),
            "olive" => Self::rgb(128, 128, 0),
            _ => return None,
        };
        Some(c)
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        match digits.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a: byte(6)? }),
            _ => None,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::named(s)
            .or_else(|| Self::from_hex(s))
            .ok_or_else(|| Error::UnknownColor(s.to_string()))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

//! 24-bit RGB color and its canonical `#rrggbb` encoding.
//!
//! A color is its own identifier: the lowercase, zero-padded hex form is
//! used verbatim as the catalog item id, so `Display` and `FromStr` must
//! round-trip exactly.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::FormatError;

/// Number of hex digits in an encoded color (without the `#` prefix).
const HEX_DIGITS: usize = 6;

/// An sRGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a `0xRRGGBB` integer. Bits above the low 24 are ignored.
    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Pack into a `0xRRGGBB` integer.
    pub const fn to_u24(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Canonical lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Channels widened to `i32` for the integer metrics below.
    fn channels(self) -> (i32, i32, i32) {
        (self.r as i32, self.g as i32, self.b as i32)
    }

    /// Perceptual luma, `(299·r + 587·g + 114·b) / 1000` truncated.
    pub fn luma(self) -> i32 {
        let (r, g, b) = self.channels();
        (299 * r + 587 * g + 114 * b) / 1000
    }

    /// Channel mean, `(r + g + b) / 3` truncated.
    pub fn mean(self) -> i32 {
        let (r, g, b) = self.channels();
        (r + g + b) / 3
    }

    /// Red/blue balance, `(r − b) / 2` truncated toward zero.
    ///
    /// Positive values lean warm, negative values lean cool.
    pub fn temperature(self) -> i32 {
        let (r, _, b) = self.channels();
        (r - b) / 2
    }

    /// Sum of pairwise channel distances, `|r−g| + |g−b| + |b−r|`.
    ///
    /// Zero for grays; at most 510.
    pub fn spread(self) -> i32 {
        let (r, g, b) = self.channels();
        (r - g).abs() + (g - b).abs() + (b - r).abs()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = FormatError;

    /// Parse `#rrggbb` or `rrggbb`, hex digits in either case.
    ///
    /// Anything other than exactly six hex digits after an optional single
    /// `#` is rejected; input is never truncated or padded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        let found = hex.chars().count();
        if found != HEX_DIGITS {
            return Err(FormatError::Length { found });
        }

        let mut value = 0_u32;
        for (position, digit) in hex.chars().enumerate() {
            let nibble = digit
                .to_digit(16)
                .ok_or(FormatError::InvalidDigit { digit, position })?;
            value = value << 4 | nibble;
        }

        Ok(Self::from_u24(value))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

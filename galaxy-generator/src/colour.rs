use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ColourParseError;

/// Linear RGB colour. Hex strings are treated as sRGB and decoded on parse,
/// so interpolation happens in linear space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Colour {
    pub const BLACK: Colour = Colour::new(0.0, 0.0, 0.0);
    pub const WHITE: Colour = Colour::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Component-wise linear interpolation. `t = 0` yields `self`, `t = 1` yields `other`.
    pub fn lerp(&self, other: &Colour, t: f32) -> Colour {
        Colour {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Parse `#rrggbb`.
    pub fn from_hex(hex: &str) -> Result<Self, ColourParseError> {
        let digits = hex
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColourParseError::MissingHash(hex.to_string()))?;

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColourParseError::InvalidDigit(hex.to_string()));
        }
        if digits.len() != 6 {
            return Err(ColourParseError::InvalidLength(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| srgb_to_linear(v as f32 / 255.0))
                .map_err(|_| ColourParseError::InvalidDigit(hex.to_string()))
        };

        Ok(Colour {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Encode back to `#rrggbb` (sRGB).
    pub fn to_hex(&self) -> String {
        let encode = |c: f32| (linear_to_srgb(c).clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            encode(self.r),
            encode(self.g),
            encode(self.b)
        )
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

impl FromStr for Colour {
    type Err = ColourParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Colour::from_hex(s)
    }
}

impl TryFrom<String> for Colour {
    type Error = ColourParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Colour::from_hex(&value)
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.to_hex()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

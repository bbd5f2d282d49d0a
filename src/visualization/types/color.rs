/*
    DayWheel

    Copyright 2024-2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------
*/
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::VizError;

/// A [VizColor] represents a color in 32-bit RGBA format.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VizColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for VizColor {
    fn default() -> VizColor {
        VizColor::TRANSPARENT
    }
}

#[rustfmt::skip]
impl VizColor {
    pub const TRANSPARENT: VizColor = VizColor { r: 0, g: 0, b: 0, a: 0 };
    pub const WHITE: VizColor = VizColor { r: 255, g: 255, b: 255, a: 255 };
    pub const BLACK: VizColor = VizColor { r: 0, g: 0, b: 0, a: 255 };
    pub const RED: VizColor = VizColor { r: 255, g: 0, b: 0, a: 255 };
    pub const GREEN: VizColor = VizColor { r: 0, g: 255, b: 0, a: 255 };

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> VizColor {
        VizColor { r, g, b, a }
    }

    /// Parse a CSS style hex color of the form `#RGB`, `#RRGGBB` or `#RRGGBBAA`. The leading `#`
    /// is optional.
    pub fn from_hex(hex: &str) -> Result<VizColor, VizError> {
        let digits = hex.trim().trim_start_matches('#');
        let bad = || VizError::InvalidParameter(format!("invalid hex color: '{}'", hex));

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| bad());

        match digits.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|n| n * 17).map_err(|_| bad());
                Ok(VizColor::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, 255))
            }
            6 => Ok(VizColor::from_rgba8(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Ok(VizColor::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(bad()),
        }
    }

    /// Return the alpha channel as an opacity in the range `[0.0, 1.0]`.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.a as f32 / 255.0
    }
}

impl FromStr for VizColor {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VizColor::from_hex(s)
    }
}

/// Colors are displayed as `#rrggbb`, or `#rrggbbaa` if not fully opaque.
impl Display for VizColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
        else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_forms() {
        assert_eq!(VizColor::from_hex("#fff").unwrap(), VizColor::WHITE);
        assert_eq!(VizColor::from_hex("#FF0000").unwrap(), VizColor::RED);
        assert_eq!(
            VizColor::from_hex("336699cc").unwrap(),
            VizColor::from_rgba8(0x33, 0x66, 0x99, 0xcc)
        );
        assert!(VizColor::from_hex("#12345").is_err());
        assert!(VizColor::from_hex("#gg0000").is_err());
        assert!(VizColor::from_hex("").is_err());
    }

    #[test]
    fn display_round_trips() {
        let c = VizColor::from_rgba8(0x12, 0xab, 0x00, 0x80);
        assert_eq!(c.to_string(), "#12ab0080");
        assert_eq!(c.to_string().parse::<VizColor>().unwrap(), c);
        assert_eq!(VizColor::from_rgba8(0, 0, 255, 255).to_string(), "#0000ff");
    }
}

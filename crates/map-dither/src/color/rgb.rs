//! 8-bit RGB color type
//!
//! [`Color`] is the storage and output form of a pixel: three 8-bit
//! channel intensities. Arithmetic happens on [`WideColor`](super::WideColor).

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color with three 8-bit channels.
///
/// Value type with no identity. Use this for image pixels and palette
/// entries. Error diffusion arithmetic is done on
/// [`WideColor`](super::WideColor), which can leave the 0..=255 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new color from channel values.
    ///
    /// # Example
    /// ```
    /// use map_dither::Color;
    /// let grass = Color::new(127, 178, 56);
    /// assert_eq!(grass.g, 178);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Create a color from a packed `0xAARRGGBB` integer.
    ///
    /// The alpha byte is ignored.
    ///
    /// # Example
    /// ```
    /// use map_dither::Color;
    /// let c = Color::from_argb(0xFF7FB238);
    /// assert_eq!(c, Color::new(0x7F, 0xB2, 0x38));
    /// ```
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self::new((argb >> 16) as u8, (argb >> 8) as u8, argb as u8)
    }

    /// Pack into a `0xAARRGGBB` integer with full alpha.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        0xFF00_0000 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

impl fmt::Display for Color {
    /// Formats as lowercase `#rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use map_dither::Color;
    ///
    /// let white: Color = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Color::WHITE);
    ///
    /// let red: Color = "#F00".parse().unwrap();
    /// assert_eq!(red, Color::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::NonAscii);
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            digits => Err(ParseColorError::InvalidLength { digits }),
        }
    }
}

//! Signed integer RGB color for error accumulation
//!
//! Error diffusion pushes channel values outside 0..=255. [`WideColor`]
//! holds those intermediate values without clamping; clamping happens only
//! when converting back to a displayable [`Color`].

use std::ops::{Add, AddAssign, Sub};

use super::rgb::Color;

/// A color with signed 32-bit channels.
///
/// Used for the working value of a pixel during dithering: the source
/// color plus all quantization error diffused into it so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WideColor {
    /// Red channel (may be negative or above 255)
    pub r: i32,
    /// Green channel (may be negative or above 255)
    pub g: i32,
    /// Blue channel (may be negative or above 255)
    pub b: i32,
}

impl WideColor {
    /// Create a new wide color from channel values.
    #[inline]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `weight / divisor`.
    ///
    /// Division truncates toward zero, so `-7 * 1 / 16 == 0` and
    /// `-33 * 7 / 16 == -14`. Output parity with reference renderers
    /// depends on this exact rounding.
    ///
    /// # Example
    /// ```
    /// use map_dither::WideColor;
    /// let err = WideColor::new(33, -33, 16);
    /// assert_eq!(err.scale(7, 16), WideColor::new(14, -14, 7));
    /// ```
    #[inline]
    pub const fn scale(self, weight: i32, divisor: i32) -> Self {
        Self {
            r: self.r * weight / divisor,
            g: self.g * weight / divisor,
            b: self.b * weight / divisor,
        }
    }

    /// Squared Euclidean distance to another color.
    #[inline]
    pub fn distance_squared(self, other: Self) -> u64 {
        let dr = (self.r - other.r) as i64;
        let dg = (self.g - other.g) as i64;
        let db = (self.b - other.b) as i64;
        (dr * dr + dg * dg + db * db) as u64
    }

    /// Returns true if every channel is exactly zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

impl From<Color> for WideColor {
    #[inline]
    fn from(c: Color) -> Self {
        Self::new(c.r as i32, c.g as i32, c.b as i32)
    }
}

impl From<WideColor> for Color {
    /// Clamps each channel into 0..=255.
    #[inline]
    fn from(w: WideColor) -> Self {
        Color::new(
            w.r.clamp(0, 255) as u8,
            w.g.clamp(0, 255) as u8,
            w.b.clamp(0, 255) as u8,
        )
    }
}

impl Add for WideColor {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for WideColor {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for WideColor {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

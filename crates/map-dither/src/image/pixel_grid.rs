//! Row-major pixel buffer.

use super::error::ImageError;
use crate::color::Color;

/// A width × height grid of [`Color`] pixels in row-major order.
///
/// This is the input and output of quantization: [`quantize`](crate::quantize)
/// consumes a grid and hands the same buffer back with every pixel replaced
/// by a palette color.
///
/// # Example
///
/// ```
/// use map_dither::{Color, PixelGrid};
///
/// let mut grid = PixelGrid::filled(3, 2, Color::BLACK);
/// grid.set(2, 1, Color::WHITE);
///
/// assert_eq!(grid.get(2, 1), Some(Color::WHITE));
/// assert_eq!(grid.get(3, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelGrid {
    /// Wrap an existing pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::DimensionMismatch`] if `pixels.len()` is not
    /// `width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self, ImageError> {
        if Some(pixels.len()) != width.checked_mul(height) {
            return Err(ImageError::DimensionMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A grid with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// A grid whose pixel at `(x, y)` is `f(x, y)`.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Color) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build a grid from a flat `[R, G, B, R, G, B, ...]` buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::DimensionMismatch`] if `bytes.len()` is not
    /// `width * height * 3`.
    pub fn from_rgb_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, ImageError> {
        if bytes.len() % 3 != 0 {
            return Err(ImageError::DimensionMismatch {
                width,
                height,
                len: bytes.len() / 3,
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|c| Color::new(c[0], c[1], c[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Returns the grid width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if the grid holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Color) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        self.pixels[y * self.width + x] = color;
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Mutable pixels in row-major order.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Consume the grid and return its pixel buffer.
    pub fn into_pixels(self) -> Vec<Color> {
        self.pixels
    }

    /// Flat `[R, G, B, R, G, B, ...]` byte buffer of length `width * height * 3`.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            rgb.extend_from_slice(&pixel.to_bytes());
        }
        rgb
    }
}

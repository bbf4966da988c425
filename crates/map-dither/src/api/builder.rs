//! Quantizer builder -- the primary ergonomic entry point for the crate.
//!
//! [`Quantizer`] owns a palette and runs Floyd-Steinberg quantization over
//! any number of images.

use crate::color::Color;
use crate::dither::{quantize, Dither, FloydSteinberg};
use crate::image::{PixelGrid, TileSet};
use crate::output::IndexedImage;
use crate::palette::{Palette, PaletteError};

use super::error::QuantizeError;

/// High-level quantizer for map tiles.
///
/// # Design
///
/// - Constructor requires a [`Palette`] (no invalid states)
/// - Quantization methods take `&self`, so one quantizer is reusable
///   across images
/// - [`Default`] uses the reference map palette
///
/// # Example
///
/// ```
/// use map_dither::{Color, PixelGrid, Quantizer};
///
/// let quantizer = Quantizer::default();
/// let image = PixelGrid::filled(4, 4, Color::new(100, 150, 200));
///
/// let result = quantizer.quantize(image);
/// assert!(result.pixels().iter().all(|&c| quantizer.palette().contains(c)));
/// ```
#[derive(Debug, Clone)]
pub struct Quantizer {
    palette: Palette,
}

impl Quantizer {
    /// Create a quantizer for the given palette.
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Create a quantizer from hex color strings.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError`] if a string does not parse or the colors do
    /// not form a valid palette.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        Ok(Self::new(Palette::from_hex(colors)?))
    }

    /// The palette output colors are drawn from.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Quantize `image` in place and return it.
    ///
    /// Every pixel of the result is exactly one palette color.
    pub fn quantize(&self, image: PixelGrid) -> PixelGrid {
        quantize(image, &self.palette)
    }

    /// Quantize `image` to palette indices, leaving the input untouched.
    pub fn quantize_indexed(&self, image: &PixelGrid) -> IndexedImage {
        let indices = FloydSteinberg.dither(image, &self.palette);
        IndexedImage::new(indices, image.width(), image.height(), self.palette.clone())
    }

    /// Quantize `image`, then cut it into square tiles.
    ///
    /// Dithering runs over the whole image before slicing, so error flows
    /// across tile borders. Edge padding uses the palette color nearest to
    /// `fill`, which keeps every tile pixel inside the palette.
    ///
    /// # Errors
    ///
    /// Returns [`QuantizeError::Image`] if `tile_size` is 0.
    pub fn quantize_tiles(
        &self,
        image: PixelGrid,
        tile_size: usize,
        fill: Color,
    ) -> Result<TileSet, QuantizeError> {
        let quantized = self.quantize(image);
        let fill = self.palette.nearest_color(fill);
        Ok(TileSet::split(&quantized, tile_size, fill)?)
    }
}

impl Default for Quantizer {
    fn default() -> Self {
        Self::new(Palette::map_colors())
    }
}

//! IndexedImage: palette indices plus the palette that produced them.
//!
//! The indexed form is what map renderers store per tile; the RGB forms
//! are computed on demand by looking up palette colors.

use crate::color::Color;
use crate::image::PixelGrid;
use crate::palette::Palette;

/// The indexed output of quantization.
///
/// Stores one `u8` palette index per pixel in row-major order, along with
/// image dimensions and the palette used.
///
/// # Example
///
/// ```
/// use map_dither::{Color, IndexedImage, Palette};
///
/// let palette = Palette::new(&[Color::BLACK, Color::WHITE]).unwrap();
///
/// // Simulate a 2x2 checkerboard dither result
/// let image = IndexedImage::new(vec![0, 1, 1, 0], 2, 2, palette);
///
/// assert_eq!(image.indices(), &[0, 1, 1, 0]);
/// assert_eq!(image.color_at(1, 0), Some(Color::WHITE));
/// assert_eq!(image.to_rgb().len(), 2 * 2 * 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    /// Palette indices, one per pixel, row-major order.
    indices: Vec<u8>,
    width: usize,
    height: usize,
    /// Owned so the image can be returned on its own.
    palette: Palette,
}

impl IndexedImage {
    /// Create a new `IndexedImage` from palette indices.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height` and that every
    /// index is inside the palette.
    pub fn new(indices: Vec<u8>, width: usize, height: usize, palette: Palette) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{}={})",
            indices.len(),
            width,
            height,
            width * height,
        );
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < palette.len()),
            "index out of palette range"
        );
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    /// Returns the palette indices as a slice.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns a reference to the palette used for this image.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Palette color at `(x, y)`, or `None` outside the image.
    pub fn color_at(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            let idx = self.indices[y * self.width + x];
            Some(self.palette.color(idx as usize))
        } else {
            None
        }
    }

    /// Number of pixels using each palette entry, indexed like the palette.
    pub fn usage(&self) -> Vec<usize> {
        let mut counts = vec![0; self.palette.len()];
        for &idx in &self.indices {
            counts[idx as usize] += 1;
        }
        counts
    }

    /// Convert to a flat `[R, G, B, R, G, B, ...]` buffer.
    ///
    /// The returned buffer has length `width * height * 3`.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            rgb.extend_from_slice(&self.palette.color(idx as usize).to_bytes());
        }
        rgb
    }

    /// Expand to a [`PixelGrid`] of palette colors.
    pub fn to_pixel_grid(&self) -> PixelGrid {
        PixelGrid::from_fn(self.width, self.height, |x, y| {
            self.palette
                .color(self.indices[y * self.width + x] as usize)
        })
    }
}

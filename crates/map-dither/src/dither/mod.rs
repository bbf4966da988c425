//! Error diffusion dithering.
//!
//! Floyd-Steinberg is the algorithm reference map renderers use, so it is
//! the one implemented here. The diffusion loop itself is kernel-driven.
//!
//! # Architecture
//!
//! Algorithms implement the [`Dither`] trait and return palette indices.
//! [`quantize`] wraps [`FloydSteinberg`] and writes palette colors back
//! into the caller's pixel buffer.
//!
//! # Example
//!
//! ```
//! use map_dither::{Color, Dither, FloydSteinberg, Palette, PixelGrid};
//!
//! let palette = Palette::new(&[Color::BLACK, Color::WHITE]).unwrap();
//! let image = PixelGrid::filled(4, 4, Color::new(128, 128, 128));
//!
//! let indices: Vec<u8> = FloydSteinberg.dither(&image, &palette);
//! assert_eq!(indices.len(), 16);
//! ```

mod floyd_steinberg;
mod kernel;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, FLOYD_STEINBERG};

use crate::color::WideColor;
use crate::image::PixelGrid;
use crate::palette::Palette;

/// Trait for error diffusion dithering algorithms.
///
/// Implementors provide a specific diffusion kernel and algorithm for
/// converting full-color images to indexed palette images.
///
/// # Error Diffusion
///
/// Error diffusion works by:
/// 1. For each pixel, find the nearest palette color
/// 2. Compute the quantization error (desired - actual)
/// 3. Distribute that error to neighboring unprocessed pixels
/// 4. Repeat, with accumulated error influencing future decisions
pub trait Dither {
    /// Dither an image to palette indices.
    ///
    /// Returns one index per pixel in row-major order, each in
    /// `0..palette.len()`. A 0-pixel image yields an empty vector.
    fn dither(&self, image: &PixelGrid, palette: &Palette) -> Vec<u8>;
}

/// Error buffer for efficient error diffusion.
///
/// Manages a sliding window of error rows, storing only the rows that
/// the diffusion kernel can reach (determined by `max_dy`). This avoids
/// allocating a full-image error buffer.
///
/// The working color of a pixel is its source color plus its accumulated
/// error. Channels are integers and never clamped here, so the sum equals
/// what a full-image working copy would hold.
///
/// # Usage Pattern
///
/// 1. Create buffer with `new(width, row_depth)`
/// 2. For each row:
///    a. Read accumulated error with `get_accumulated(x)`
///    b. After processing pixel, distribute error with `add_error(x, dy, error)`
///    c. After row complete, call `advance_row()`
#[derive(Debug)]
pub struct ErrorBuffer {
    /// Error rows: rows[0] is current row, rows[1] is next, etc.
    rows: Vec<Vec<WideColor>>,
    /// Image width
    width: usize,
}

impl ErrorBuffer {
    /// Create a new error buffer.
    ///
    /// # Arguments
    ///
    /// * `width` - Image width in pixels
    /// * `row_depth` - Number of rows to track (kernel's `max_dy + 1`)
    pub fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth)
                .map(|_| vec![WideColor::default(); width])
                .collect(),
            width,
        }
    }

    /// Get accumulated error for a pixel in the current row.
    #[inline]
    pub fn get_accumulated(&self, x: usize) -> WideColor {
        self.rows[0][x]
    }

    /// Add error to a future pixel.
    ///
    /// # Arguments
    ///
    /// * `x` - Target pixel x-coordinate
    /// * `row_offset` - Row offset (0 = current row, 1 = next row, etc.)
    /// * `error` - Error to add
    ///
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: WideColor) {
        if x < self.width && row_offset < self.rows.len() {
            self.rows[row_offset][x] += error;
        }
    }

    /// Advance to the next row.
    ///
    /// Rotates the row buffer: the first row is discarded, subsequent rows
    /// shift forward, and a new zeroed row is added at the end.
    pub fn advance_row(&mut self) {
        // Rotate left: [0,1] -> [1,0]
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill(WideColor::default());
        }
    }
}

/// Dither an image with the given kernel.
///
/// Scans row-major, top-to-bottom and left-to-right. For each pixel the
/// nearest palette entry to the working color is chosen, and
/// `working - chosen` is spread over the kernel's neighbors. Neighbors
/// outside the image are skipped, with no wraparound.
pub fn dither_with_kernel(image: &PixelGrid, palette: &Palette, kernel: &Kernel) -> Vec<u8> {
    let width = image.width();
    let height = image.height();
    let mut indices = vec![0u8; width * height];

    if indices.is_empty() {
        return indices;
    }

    let divisor = kernel.divisor as i32;
    let mut errors = ErrorBuffer::new(width, kernel.max_dy + 1);
    let pixels = image.pixels();

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let working = WideColor::from(pixels[idx]) + errors.get_accumulated(x);

            let (best, _) = palette.find_nearest(working);
            // Palette construction caps the length at 64
            indices[idx] = best as u8;

            let error = working - palette.wide(best);
            if error.is_zero() {
                continue;
            }

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + dx as i64;
                let ny = y + dy as usize;
                if nx < 0 || nx as usize >= width || ny >= height {
                    continue;
                }
                errors.add_error(nx as usize, dy as usize, error.scale(weight as i32, divisor));
            }
        }
        errors.advance_row();
    }

    indices
}

/// Quantize an image to a palette with Floyd-Steinberg error diffusion.
///
/// The pixel buffer of `image` is transformed in place and handed back:
/// every pixel of the result is exactly one of the palette's colors.
/// A 0-pixel image is returned unchanged.
///
/// # Example
///
/// ```
/// use map_dither::{quantize, Color, Palette, PixelGrid};
///
/// let palette = Palette::map_colors();
/// let image = PixelGrid::filled(8, 8, Color::new(10, 200, 60));
///
/// let result = quantize(image, &palette);
/// assert!(result.pixels().iter().all(|&c| palette.contains(c)));
/// ```
pub fn quantize(mut image: PixelGrid, palette: &Palette) -> PixelGrid {
    let indices = FloydSteinberg.dither(&image, palette);
    for (pixel, idx) in image.pixels_mut().iter_mut().zip(indices) {
        *pixel = palette.color(idx as usize);
    }
    image
}

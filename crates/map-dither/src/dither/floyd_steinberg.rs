//! Floyd-Steinberg error diffusion dithering algorithm.
//!
//! Floyd-Steinberg distributes 100% of the quantization error to 4
//! neighbors. With integer channels and truncating weights it matches the
//! output of reference map renderers exactly.

use crate::image::PixelGrid;
use crate::palette::Palette;

use super::{dither_with_kernel, Dither, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// # Algorithm
///
/// The Floyd-Steinberg kernel distributes error to 4 neighbors:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// Each weighted share is truncated toward zero per channel.
///
/// # Example
///
/// ```
/// use map_dither::{Color, Dither, FloydSteinberg, Palette, PixelGrid};
///
/// let palette = Palette::new(&[Color::BLACK, Color::WHITE]).unwrap();
/// let image = PixelGrid::filled(2, 2, Color::BLACK);
///
/// let indices = FloydSteinberg.dither(&image, &palette);
/// assert_eq!(indices, vec![0, 0, 0, 0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, image: &PixelGrid, palette: &Palette) -> Vec<u8> {
        dither_with_kernel(image, palette, &FLOYD_STEINBERG)
    }
}

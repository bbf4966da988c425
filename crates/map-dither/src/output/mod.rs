//! Output types for the quantization pipeline.
//!
//! [`IndexedImage`] stores palette indices with dimension metadata and an
//! owned [`Palette`](crate::palette::Palette), offering RGB bytes and a
//! [`PixelGrid`](crate::image::PixelGrid) on demand.

mod indexed_image;

pub use indexed_image::IndexedImage;

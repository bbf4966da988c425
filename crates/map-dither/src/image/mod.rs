//! Pixel buffers and tile slicing
//!
//! [`PixelGrid`] is the image representation the quantizer works on.
//! [`TileSet`] cuts a grid into the fixed-size squares that are shown one
//! per display frame.

mod error;
mod pixel_grid;
mod tiles;

pub use error::ImageError;
pub use pixel_grid::PixelGrid;
pub use tiles::TileSet;

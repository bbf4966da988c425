//! Error types for pixel grids and tile slicing.

use std::fmt;

/// Error type for pixel grid construction and slicing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// Pixel buffer length does not match the declared dimensions
    DimensionMismatch {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
        /// Number of pixels actually supplied
        len: usize,
    },
    /// Tile edge length of zero
    InvalidTileSize,
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::DimensionMismatch { width, height, len } => {
                write!(
                    f,
                    "pixel buffer has {} pixels, expected {}x{}",
                    len, width, height
                )
            }
            ImageError::InvalidTileSize => {
                write!(f, "tile size must be at least 1 pixel")
            }
        }
    }
}

impl std::error::Error for ImageError {}

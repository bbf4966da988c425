//! Unified error type for the map-dither public API.
//!
//! [`QuantizeError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::image::ImageError;
use crate::palette::{PaletteError, ParseColorError};
use std::fmt;

/// Unified error type for the map-dither public API.
///
/// # Example
///
/// ```
/// use map_dither::{Palette, QuantizeError};
///
/// fn create_palette() -> Result<Palette, QuantizeError> {
///     let palette = Palette::from_hex(&["#000000", "#FFFFFF"])?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug)]
pub enum QuantizeError {
    /// Palette validation error (empty, too large, duplicate, or parse error)
    Palette(PaletteError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
    /// Pixel grid or tile slicing error
    Image(ImageError),
}

impl fmt::Display for QuantizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantizeError::Palette(err) => write!(f, "palette error: {}", err),
            QuantizeError::ParseColor(err) => write!(f, "color parse error: {}", err),
            QuantizeError::Image(err) => write!(f, "image error: {}", err),
        }
    }
}

impl std::error::Error for QuantizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuantizeError::Palette(err) => Some(err),
            QuantizeError::ParseColor(err) => Some(err),
            QuantizeError::Image(err) => Some(err),
        }
    }
}

impl From<PaletteError> for QuantizeError {
    fn from(err: PaletteError) -> Self {
        QuantizeError::Palette(err)
    }
}

impl From<ParseColorError> for QuantizeError {
    fn from(err: ParseColorError) -> Self {
        QuantizeError::ParseColor(err)
    }
}

impl From<ImageError> for QuantizeError {
    fn from(err: ImageError) -> Self {
        QuantizeError::Image(err)
    }
}

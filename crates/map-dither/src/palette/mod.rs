//! Palette types and utilities
//!
//! This module provides the [`Palette`] type, the embedded reference map
//! colors, and error types for parsing and validation.

mod error;
mod map_colors;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use map_colors::MAP_COLORS;
pub use palette::{Palette, MAX_COLORS};

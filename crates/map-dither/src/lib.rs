// Module layout mirrors type names (palette::palette, domain_tests::domain_tests)
#![allow(clippy::module_inception)]

//! map-dither: palette quantization for map tiles
//!
//! This library reduces full-color images to a small fixed palette with
//! Floyd-Steinberg error diffusion and cuts the result into square tiles,
//! one per display frame.
//!
//! # Quick Start
//!
//! The [`Quantizer`] builder is the primary entry point:
//!
//! ```
//! use map_dither::{Color, PixelGrid, Quantizer};
//!
//! let quantizer = Quantizer::default(); // reference map palette
//! let image = PixelGrid::filled(4, 4, Color::new(128, 128, 128));
//!
//! let result = quantizer.quantize(image);
//!
//! assert_eq!(result.width(), 4);
//! assert!(result.pixels().iter().all(|&c| quantizer.palette().contains(c)));
//! ```
//!
//! # Output Parity
//!
//! Output is bit-identical to reference map renderers when the reference
//! palette is used. Three details make that hold, and changing any of them
//! changes the output:
//!
//! - **Integer error channels.** The working color of a pixel is its source
//!   color plus accumulated error in `i32` channels ([`WideColor`]). It is
//!   never clamped or rounded while error accumulates; clamping to 0..=255
//!   happens only when a value becomes a displayable [`Color`].
//! - **Truncating weights.** Each neighbor's share is
//!   `error * weight / 16`, truncated toward zero per channel.
//! - **Ordered ties.** Nearest-color search minimizes squared RGB distance
//!   and keeps the first entry on ties, so palette order is part of the
//!   contract.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PixelGrid (Color, u8 channels)
//!     |
//!     v
//! ╔═══════════════════════════════════════════╗
//! ║  Dither loop (row-major scan)             ║
//! ║                                           ║
//! ║  pixel + accumulated error  (WideColor)   ║
//! ║      |                                    ║
//! ║  find_nearest()  (squared RGB distance)   ║
//! ║      |                                    ║
//! ║  palette index (output)                   ║
//! ║      |                                    ║
//! ║  error = working - palette[idx]           ║
//! ║      |                                    ║
//! ║  diffuse 7/16, 3/16, 5/16, 1/16 forward   ║
//! ╚═══════════════════════════════════════════╝
//!     |
//!     v
//! PixelGrid of palette colors  /  IndexedImage
//!     |
//!     v
//! TileSet (columns × rows square tiles)
//! ```

pub mod api;
pub mod color;
pub mod dither;
pub mod image;
pub mod output;
pub mod palette;


pub use api::{QuantizeError, Quantizer};
pub use color::{Color, WideColor};
pub use dither::{quantize, Dither, FloydSteinberg};
pub use image::{ImageError, PixelGrid, TileSet};
pub use output::IndexedImage;
pub use palette::{Palette, PaletteError, ParseColorError, MAP_COLORS, MAX_COLORS};

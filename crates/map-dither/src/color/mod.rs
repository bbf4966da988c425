//! Color types
//!
//! Two representations with a compile-time distinction between stored and
//! in-flight values:
//!
//! - **[`Color`]**: 8-bit channels. Use for image pixels and palette entries.
//! - **[`WideColor`]**: signed 32-bit channels. Use for error diffusion math.
//!
//! # Example
//!
//! ```
//! use map_dither::{Color, WideColor};
//!
//! let pixel = Color::new(200, 40, 40);
//! let working = WideColor::from(pixel) + WideColor::new(80, -50, 0);
//!
//! // Clamped only when turned back into a displayable color
//! assert_eq!(Color::from(working), Color::new(255, 0, 40));
//! ```

mod rgb;
mod wide;

pub use rgb::Color;
pub use wide::WideColor;

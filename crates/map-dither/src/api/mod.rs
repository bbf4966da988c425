//! Public API for the map-dither crate.
//!
//! This module provides the high-level API: the [`Quantizer`] builder and
//! the [`QuantizeError`] unified error type.

mod builder;
mod error;

pub use builder::Quantizer;
pub use error::QuantizeError;

//! Poster Wall
//!
//! Dithers images to the map palette, slices them into one tile per display
//! frame and works out which tile goes into which frame on a wall, floor or
//! ceiling. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;

//! Test fixtures and constants.

use map_dither::{Color, PixelGrid};
use poster_wall::models::{PosterGrid, PosterMeta, TileId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tile ids of the 3x2 reference poster, standing in for A..F
pub mod tiles {
    use poster_wall::models::TileId;

    pub const A: TileId = 10;
    pub const B: TileId = 11;
    pub const C: TileId = 12;
    pub const D: TileId = 13;
    pub const E: TileId = 14;
    pub const F: TileId = 15;

    pub const ALL: [TileId; 6] = [A, B, C, D, E, F];
}

/// The 3x2 poster `[A B C / D E F]`
pub fn poster_3x2() -> PosterGrid {
    PosterGrid::new(3, 2, tiles::ALL.to_vec(), PosterMeta::default())
        .expect("reference poster is valid")
}

/// A `columns` x `rows` poster numbered from `first`
pub fn numbered_poster(columns: u32, rows: u32, first: TileId) -> PosterGrid {
    let count = (columns * rows) as TileId;
    PosterGrid::new(columns, rows, (first..first + count).collect(), PosterMeta::default())
        .expect("numbered poster is valid")
}

pub fn named_meta(name: &str) -> PosterMeta {
    PosterMeta {
        owner: Some("tester".to_string()),
        id: Some(format!("{name}-id")),
        name: Some(name.to_string()),
    }
}

/// Seeded random image, reproducible across runs
pub fn random_image(width: usize, height: usize, seed: u64) -> PixelGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    PixelGrid::from_fn(width, height, |_, _| Color::new(rng.gen(), rng.gen(), rng.gen()))
}

/// Smooth diagonal gradient, the worst case for banding
pub fn gradient_image(width: usize, height: usize) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| {
        let t = (x + y) * 255 / (width + height).max(2);
        Color::new(t as u8, (255 - t) as u8, (t / 2) as u8)
    })
}

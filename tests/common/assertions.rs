//! Assertion helpers for tests.

use map_dither::{Palette, PixelGrid};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

use poster_wall::models::PosterGrid;
use poster_wall::services::PlacementPlan;

/// Assert every pixel is exactly a palette entry
pub fn assert_in_palette(image: &PixelGrid, palette: &Palette) {
    for (i, color) in image.pixels().iter().enumerate() {
        assert!(
            palette.contains(*color),
            "Pixel {} ({}, {}) is {}, not a palette color",
            i,
            i % image.width().max(1),
            i / image.width().max(1),
            color
        );
    }
}

/// Assert a plan puts every tile of the poster into exactly one frame
pub fn assert_plan_is_permutation(plan: &PlacementPlan, grid: &PosterGrid) {
    assert_eq!(plan.len(), grid.tile_count(), "Plan must cover every frame");

    let placed: HashSet<_> = plan.placements().iter().map(|p| p.tile).collect();
    let expected: HashSet<_> = grid.tiles().iter().copied().collect();
    assert_eq!(placed, expected, "Plan must place every tile exactly once");

    for (slot, placement) in plan.placements().iter().enumerate() {
        assert_eq!(placement.slot, slot, "Placements must be in scan order");
    }
}

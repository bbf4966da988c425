//! Palette struct with nearest-color matching.
//!
//! This module provides the core `Palette` type: an ordered, immutable set
//! of distinct colors with a squared-Euclidean nearest-color search.

use std::collections::HashSet;
use std::str::FromStr;

use super::error::PaletteError;
use super::map_colors::MAP_COLORS;
use crate::color::{Color, WideColor};

/// Largest palette a map display can show.
pub const MAX_COLORS: usize = 64;

/// An ordered color palette with nearest-color matching.
///
/// Entry order is significant: when two entries are equally close to a
/// color, the one with the lower index wins. Two palettes with the same
/// colors in a different order can therefore dither differently.
///
/// # Precomputation
///
/// Every entry is stored both as a [`Color`] (for output) and as a
/// [`WideColor`] (for distance and error math), converted once at
/// construction so the per-pixel search does no conversion work.
///
/// # Example
///
/// ```
/// use map_dither::{Color, Palette};
///
/// let colors = [Color::BLACK, Color::WHITE];
/// let palette = Palette::new(&colors).unwrap();
///
/// assert_eq!(palette.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
    wide: Vec<WideColor>,
}

impl Palette {
    /// Create a new palette from colors.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `colors` is empty ([`PaletteError::EmptyPalette`])
    /// - `colors` has more than 64 entries ([`PaletteError::TooManyColors`])
    /// - `colors` contains the same color twice ([`PaletteError::DuplicateColor`])
    pub fn new(colors: &[Color]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if colors.len() > MAX_COLORS {
            return Err(PaletteError::TooManyColors {
                count: colors.len(),
            });
        }

        let mut seen = HashSet::new();
        for (i, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self::from_validated(colors.to_vec()))
    }

    /// The reference map palette: 58 colors in reference order.
    ///
    /// Use this palette for output that must match reference renderers
    /// bit for bit.
    ///
    /// ```
    /// use map_dither::Palette;
    ///
    /// let palette = Palette::map_colors();
    /// assert_eq!(palette.len(), 58);
    /// ```
    pub fn map_colors() -> Self {
        // Validity of the constant table is covered by tests.
        Self::from_validated(MAP_COLORS.to_vec())
    }

    /// Create a palette from hex color strings.
    ///
    /// This is a convenience constructor that parses hex strings like
    /// "#FF0000" or "#F00" and creates a palette.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] if any hex string is invalid,
    /// or other [`PaletteError`] variants for palette validation failures.
    ///
    /// # Example
    ///
    /// ```
    /// use map_dither::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000000", "#FFFFFF", "#FF0000"]).unwrap();
    /// assert_eq!(palette.len(), 3);
    /// ```
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        let parsed = colors
            .iter()
            .map(|s| Color::from_str(s.as_ref()).map_err(PaletteError::ParseColor))
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(&parsed)
    }

    fn from_validated(colors: Vec<Color>) -> Self {
        let wide = colors.iter().map(|&c| WideColor::from(c)).collect();
        Self { colors, wide }
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Note: This always returns `false` since empty palettes are rejected
    /// at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    #[inline]
    pub fn color(&self, idx: usize) -> Color {
        self.colors[idx]
    }

    /// Get the color at the given index in its arithmetic form.
    #[inline]
    pub fn wide(&self, idx: usize) -> WideColor {
        self.wide[idx]
    }

    /// All palette colors in palette order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Index of an exact palette entry, if present.
    pub fn index_of(&self, color: Color) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }

    /// Returns true if `color` is exactly one of the palette entries.
    #[inline]
    pub fn contains(&self, color: Color) -> bool {
        self.index_of(color).is_some()
    }

    /// Find the nearest palette color by squared Euclidean RGB distance.
    ///
    /// The input is not clamped: a working color pushed outside 0..=255 by
    /// diffused error is compared as is. Ties go to the lowest index.
    ///
    /// Returns `(index, distance_squared)`.
    ///
    /// # Example
    ///
    /// ```
    /// use map_dither::{Color, Palette, WideColor};
    ///
    /// let palette = Palette::new(&[Color::BLACK, Color::WHITE]).unwrap();
    ///
    /// let (idx, dist) = palette.find_nearest(WideColor::new(200, 200, 200));
    /// assert_eq!(idx, 1);
    /// assert_eq!(dist, 3 * 55 * 55);
    /// ```
    #[inline]
    pub fn find_nearest(&self, color: WideColor) -> (usize, u64) {
        // Linear scan - palettes are at most a few dozen entries
        let mut best_idx = 0;
        let mut best_dist = u64::MAX;

        for (i, &entry) in self.wide.iter().enumerate() {
            let dist = entry.distance_squared(color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// Nearest palette color to an 8-bit color.
    #[inline]
    pub fn nearest_color(&self, color: Color) -> Color {
        let (idx, _) = self.find_nearest(WideColor::from(color));
        self.colors[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Construction tests
    #[test]
    fn test_palette_basic_construction() {
        let colors = [Color::BLACK, Color::WHITE, Color::new(255, 0, 0)];
        let palette = Palette::new(&colors).unwrap();
        assert_eq!(palette.len(), 3);
        assert!(!palette.is_empty());
        assert_eq!(palette.color(2), Color::new(255, 0, 0));
        assert_eq!(palette.wide(2), WideColor::new(255, 0, 0));
    }

    #[test]
    fn test_palette_empty_error() {
        let result = Palette::new(&[]);
        assert!(matches!(result, Err(PaletteError::EmptyPalette)));
    }

    #[test]
    fn test_palette_too_many_colors() {
        let colors: Vec<Color> = (0..65u8).map(|i| Color::new(i * 3, 0, 0)).collect();
        let result = Palette::new(&colors);
        assert_eq!(result, Err(PaletteError::TooManyColors { count: 65 }));
    }

    #[test]
    fn test_palette_full_size_accepted() {
        let colors: Vec<Color> = (0..64u8).map(|i| Color::new(i * 3, 0, 0)).collect();
        let palette = Palette::new(&colors).unwrap();
        assert_eq!(palette.len(), MAX_COLORS);
        assert_eq!(palette.find_nearest(Color::new(189, 0, 0).into()).0, 63);
    }

    #[test]
    fn test_palette_duplicate_color() {
        let colors = [
            Color::new(255, 0, 0),
            Color::new(0, 255, 0),
            Color::new(255, 0, 0), // Duplicate
        ];
        let result = Palette::new(&colors);
        assert_eq!(result, Err(PaletteError::DuplicateColor { index: 2 }));
    }

    #[test]
    fn test_map_colors_is_valid_palette() {
        let reference = Palette::map_colors();
        let validated = Palette::new(&MAP_COLORS).expect("reference table must validate");
        assert_eq!(reference, validated);
        assert_eq!(reference.len(), 58);
        assert_eq!(reference.color(0), Color::new(127, 178, 56));
        assert_eq!(reference.color(57), Color::new(20, 180, 133));
    }

    #[test]
    fn test_from_hex() {
        let palette = Palette::from_hex(&["#000", "ffffff"]).unwrap();
        assert_eq!(palette.colors(), &[Color::BLACK, Color::WHITE]);

        let owned = vec!["#7fb238".to_string()];
        let palette = Palette::from_hex(&owned).unwrap();
        assert_eq!(palette.color(0), Color::new(127, 178, 56));
    }

    #[test]
    fn test_from_hex_invalid() {
        let result = Palette::from_hex(&["#000000", "#12"]);
        assert!(matches!(result, Err(PaletteError::ParseColor(_))));
    }

    // find_nearest tests
    #[test]
    fn test_find_nearest_exact_match() {
        let palette = Palette::map_colors();
        for (i, &c) in MAP_COLORS.iter().enumerate() {
            let (idx, dist) = palette.find_nearest(WideColor::from(c));
            assert_eq!(idx, i);
            assert_eq!(dist, 0);
        }
    }

    #[test]
    fn test_find_nearest_tie_goes_to_first_entry() {
        let palette = Palette::new(&[Color::new(0, 0, 0), Color::new(20, 0, 0)]).unwrap();
        let (idx, dist) = palette.find_nearest(WideColor::new(10, 0, 0));
        assert_eq!(idx, 0);
        assert_eq!(dist, 100);

        // Same colors, reversed order: the tie now resolves the other way
        let reversed = Palette::new(&[Color::new(20, 0, 0), Color::new(0, 0, 0)]).unwrap();
        let (idx, _) = reversed.find_nearest(WideColor::new(10, 0, 0));
        assert_eq!(idx, 0);
        assert_eq!(reversed.color(idx), Color::new(20, 0, 0));
    }

    #[test]
    fn test_find_nearest_unclamped_input() {
        let palette = Palette::new(&[Color::new(0, 0, 0), Color::new(255, 0, 0)]).unwrap();
        // Far below zero still prefers black
        let (idx, dist) = palette.find_nearest(WideColor::new(-100, 0, 0));
        assert_eq!(idx, 0);
        assert_eq!(dist, 10_000);
    }

    #[test]
    fn test_index_of_and_contains() {
        let palette = Palette::map_colors();
        assert_eq!(palette.index_of(Color::WHITE), Some(7));
        assert!(palette.contains(Color::new(25, 25, 25)));
        assert!(!palette.contains(Color::BLACK));
    }

    #[test]
    fn test_nearest_color() {
        let palette = Palette::map_colors();
        // Black is not in the reference table; the darkest grey is
        assert_eq!(palette.nearest_color(Color::BLACK), Color::new(25, 25, 25));
    }
}

use map_dither::{PaletteError, QuantizeError};
use thiserror::Error;

use crate::models::TileId;

/// Failures of poster construction and tile addressing.
///
/// Construction failures (`TileCountMismatch`, `DuplicateTile`) mean nothing
/// was built. Lookup and bounds failures are returned instead of a default
/// tile so that a caller never silently fills the wrong frame.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PosterError {
    #[error("Tile count mismatch: a {columns}x{rows} poster needs {expected} tiles, got {actual}")]
    TileCountMismatch {
        columns: u32,
        rows: u32,
        expected: u64,
        actual: usize,
    },

    #[error("Duplicate tile id {id} at index {index}")]
    DuplicateTile { id: TileId, index: usize },

    #[error("Tile {0} is not part of this poster")]
    TileNotFound(TileId),

    #[error("Index {index} is outside the {columns}x{rows} poster")]
    IndexOutOfBounds { index: usize, columns: u32, rows: u32 },

    #[error("Cell ({column}, {row}) is outside the {columns}x{rows} poster")]
    CellOutOfBounds {
        column: u32,
        row: u32,
        columns: u32,
        rows: u32,
    },

    #[error("Poster has no column/row layout")]
    NoLayout,
}

/// Failures loading or saving a persisted poster record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid poster: {0}")]
    Poster(#[from] PosterError),
}

/// Failures building the runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid palette: {0}")]
    Palette(#[from] PaletteError),

    #[error("Invalid fill color {value:?}: {reason}")]
    Fill { value: String, reason: String },
}

/// Failures of the image import pipeline.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Quantization failed: {0}")]
    Quantize(#[from] QuantizeError),

    #[error("Tile ids exhausted: {count} tiles starting at {first} overflow the id range")]
    IdOverflow { first: TileId, count: usize },

    #[error("Poster is too large: {columns}x{rows} tiles")]
    TooLarge { columns: usize, rows: usize },

    #[error("Invalid poster: {0}")]
    Poster(#[from] PosterError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_error_tile_count_mismatch() {
        let error = PosterError::TileCountMismatch {
            columns: 3,
            rows: 2,
            expected: 6,
            actual: 3,
        };
        assert_eq!(
            error.to_string(),
            "Tile count mismatch: a 3x2 poster needs 6 tiles, got 3"
        );
    }

    #[test]
    fn test_poster_error_tile_not_found() {
        let error = PosterError::TileNotFound(42);
        assert_eq!(error.to_string(), "Tile 42 is not part of this poster");
    }

    #[test]
    fn test_poster_error_bounds() {
        let error = PosterError::IndexOutOfBounds {
            index: 6,
            columns: 3,
            rows: 2,
        };
        assert_eq!(error.to_string(), "Index 6 is outside the 3x2 poster");

        let error = PosterError::CellOutOfBounds {
            column: 3,
            row: 0,
            columns: 3,
            rows: 2,
        };
        assert_eq!(error.to_string(), "Cell (3, 0) is outside the 3x2 poster");
    }

    #[test]
    fn test_poster_error_no_layout() {
        assert_eq!(
            PosterError::NoLayout.to_string(),
            "Poster has no column/row layout"
        );
    }

    #[test]
    fn test_record_error_from_poster_error() {
        let record_error: RecordError = PosterError::NoLayout.into();
        match record_error {
            RecordError::Poster(PosterError::NoLayout) => {}
            _ => panic!("Expected Poster variant"),
        }
    }

    #[test]
    fn test_config_error_from_palette_error() {
        let error: ConfigError = PaletteError::EmptyPalette.into();
        assert_eq!(error.to_string(), "Invalid palette: palette cannot be empty");
    }
}

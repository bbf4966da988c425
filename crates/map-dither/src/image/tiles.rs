//! Slicing a pixel grid into fixed-size square tiles.

use super::error::ImageError;
use super::pixel_grid::PixelGrid;
use crate::color::Color;

/// A pixel grid cut into `columns × rows` square tiles, row-major.
///
/// Tile `i` covers source columns `(i % columns) * size ..` and rows
/// `(i / columns) * size ..`. Tiles reaching past the right or bottom edge
/// of the source are padded with the fill color given to
/// [`TileSet::split`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSet {
    columns: usize,
    rows: usize,
    tile_size: usize,
    tiles: Vec<PixelGrid>,
}

impl TileSet {
    /// Cut `image` into square tiles of `tile_size` pixels.
    ///
    /// A 0-pixel image yields an empty set with 0 columns and 0 rows.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidTileSize`] if `tile_size` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// use map_dither::{Color, PixelGrid, TileSet};
    ///
    /// let image = PixelGrid::filled(300, 130, Color::WHITE);
    /// let tiles = TileSet::split(&image, 128, Color::BLACK).unwrap();
    ///
    /// assert_eq!((tiles.columns(), tiles.rows()), (3, 2));
    /// assert_eq!(tiles.len(), 6);
    /// ```
    pub fn split(image: &PixelGrid, tile_size: usize, fill: Color) -> Result<Self, ImageError> {
        if tile_size == 0 {
            return Err(ImageError::InvalidTileSize);
        }
        if image.is_empty() {
            return Ok(Self {
                columns: 0,
                rows: 0,
                tile_size,
                tiles: Vec::new(),
            });
        }

        let columns = image.width().div_ceil(tile_size);
        let rows = image.height().div_ceil(tile_size);

        let mut tiles = Vec::with_capacity(columns * rows);
        for row in 0..rows {
            for column in 0..columns {
                let x0 = column * tile_size;
                let y0 = row * tile_size;
                tiles.push(PixelGrid::from_fn(tile_size, tile_size, |x, y| {
                    image.get(x0 + x, y0 + y).unwrap_or(fill)
                }));
            }
        }

        Ok(Self {
            columns,
            rows,
            tile_size,
            tiles,
        })
    }

    /// Number of tile columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of tile rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Edge length of every tile in pixels.
    #[inline]
    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Total number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns true if there are no tiles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at `(column, row)`, or `None` outside the set.
    pub fn get(&self, column: usize, row: usize) -> Option<&PixelGrid> {
        if column < self.columns && row < self.rows {
            self.tiles.get(row * self.columns + column)
        } else {
            None
        }
    }

    /// Tiles in row-major order.
    #[inline]
    pub fn tiles(&self) -> &[PixelGrid] {
        &self.tiles
    }

    /// Consume the set and return its tiles in row-major order.
    pub fn into_tiles(self) -> Vec<PixelGrid> {
        self.tiles
    }
}

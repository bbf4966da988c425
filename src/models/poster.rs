use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::orientation::Orientation;
use crate::error::PosterError;

/// Identifier of one quantized tile (one display frame's worth of image).
pub type TileId = i32;

/// Opaque pass-through metadata carried with a poster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosterMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Tiles of one multi-tile image in row-major order, with their layout.
///
/// Row 0 is the top of the image. A poster with `columns == 0` or
/// `rows == 0` has no layout: it is a plain list of tiles and every 2-D
/// query returns [`PosterError::NoLayout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterGrid {
    tiles: Vec<TileId>,
    columns: u32,
    rows: u32,
    meta: PosterMeta,
}

impl PosterGrid {
    /// Build a poster, validating the tile count and tile uniqueness.
    pub fn new(
        columns: u32,
        rows: u32,
        tiles: Vec<TileId>,
        meta: PosterMeta,
    ) -> Result<Self, PosterError> {
        if columns > 0 && rows > 0 {
            let expected = u64::from(columns) * u64::from(rows);
            if tiles.len() as u64 != expected {
                return Err(PosterError::TileCountMismatch {
                    columns,
                    rows,
                    expected,
                    actual: tiles.len(),
                });
            }
        }

        let mut seen = HashSet::with_capacity(tiles.len());
        for (index, &id) in tiles.iter().enumerate() {
            if !seen.insert(id) {
                return Err(PosterError::DuplicateTile { id, index });
            }
        }

        Ok(Self {
            tiles,
            columns,
            rows,
            meta,
        })
    }

    /// A poster without layout information.
    pub fn unstructured(tiles: Vec<TileId>, meta: PosterMeta) -> Result<Self, PosterError> {
        Self::new(0, 0, tiles, meta)
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn tiles(&self) -> &[TileId] {
        &self.tiles
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn meta(&self) -> &PosterMeta {
        &self.meta
    }

    pub fn has_layout(&self) -> bool {
        self.columns > 0 && self.rows > 0
    }

    fn require_layout(&self) -> Result<(), PosterError> {
        if self.has_layout() {
            Ok(())
        } else {
            Err(PosterError::NoLayout)
        }
    }

    fn check_index(&self, index: usize) -> Result<(), PosterError> {
        if index < self.tiles.len() {
            Ok(())
        } else {
            Err(PosterError::IndexOutOfBounds {
                index,
                columns: self.columns,
                rows: self.rows,
            })
        }
    }

    fn check_cell(&self, column: u32, row: u32) -> Result<(), PosterError> {
        if column < self.columns && row < self.rows {
            Ok(())
        } else {
            Err(PosterError::CellOutOfBounds {
                column,
                row,
                columns: self.columns,
                rows: self.rows,
            })
        }
    }

    /// Column of storage index `index`.
    pub fn column_at(&self, index: usize) -> Result<u32, PosterError> {
        self.require_layout()?;
        self.check_index(index)?;
        Ok((index % self.columns as usize) as u32)
    }

    /// Row of storage index `index`, 0 being the top row.
    pub fn row_at(&self, index: usize) -> Result<u32, PosterError> {
        self.require_layout()?;
        self.check_index(index)?;
        Ok((index / self.columns as usize) as u32)
    }

    /// Storage index of cell `(column, row)`.
    pub fn index_at(&self, column: u32, row: u32) -> Result<usize, PosterError> {
        self.require_layout()?;
        self.check_cell(column, row)?;
        Ok(row as usize * self.columns as usize + column as usize)
    }

    /// Tile stored at `index`. Works without a layout.
    pub fn tile_at(&self, index: usize) -> Result<TileId, PosterError> {
        self.check_index(index)?;
        Ok(self.tiles[index])
    }

    pub fn tile_at_cell(&self, column: u32, row: u32) -> Result<TileId, PosterError> {
        let index = self.index_at(column, row)?;
        Ok(self.tiles[index])
    }

    /// Tile shown at physical scan position `slot` on a surface with the
    /// given orientation.
    pub fn tile_for_slot(&self, slot: usize, orientation: Orientation) -> Result<TileId, PosterError> {
        let (column, row) = orientation.cell_for_slot(slot, self.columns, self.rows)?;
        self.tile_at_cell(column, row)
    }

    /// Physical scan position at which `tile` is shown.
    pub fn slot_for_tile(&self, tile: TileId, orientation: Orientation) -> Result<usize, PosterError> {
        self.require_layout()?;
        let index = self.index_of(tile)?;
        let column = (index % self.columns as usize) as u32;
        let row = (index / self.columns as usize) as u32;
        orientation.slot_for_cell(column, row, self.columns, self.rows)
    }

    /// Storage index of `tile`.
    pub fn index_of(&self, tile: TileId) -> Result<usize, PosterError> {
        self.tiles
            .iter()
            .position(|&id| id == tile)
            .ok_or(PosterError::TileNotFound(tile))
    }

    pub fn contains(&self, tile: TileId) -> bool {
        self.tiles.contains(&tile)
    }
}

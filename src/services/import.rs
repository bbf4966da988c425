use map_dither::{Color, PixelGrid, Quantizer, TileSet};

use crate::error::{ConfigError, ImportError};
use crate::models::{AppConfig, PosterGrid, PosterMeta, TileId};

/// A freshly imported poster and the tile images its ids refer to.
///
/// `tiles.tiles()[i]` is the image of `poster.tiles()[i]`.
#[derive(Debug, Clone)]
pub struct ImportedPoster {
    pub poster: PosterGrid,
    pub tiles: TileSet,
}

/// Turns decoded images into posters: quantize, slice, allocate ids.
#[derive(Debug, Clone)]
pub struct ImportService {
    quantizer: Quantizer,
    tile_size: usize,
    fill: Color,
}

impl ImportService {
    pub fn new(quantizer: Quantizer, tile_size: usize, fill: Color) -> Self {
        Self {
            quantizer,
            tile_size,
            fill,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            Quantizer::new(config.palette()?),
            config.tile_size as usize,
            config.fill_color()?,
        ))
    }

    pub fn quantizer(&self) -> &Quantizer {
        &self.quantizer
    }

    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Import `image` as a poster whose tiles are numbered from `first_id`.
    ///
    /// The whole image is dithered before slicing, so tile borders show no
    /// seams. Ids are assigned in row-major tile order.
    pub fn import(
        &self,
        image: PixelGrid,
        first_id: TileId,
        meta: PosterMeta,
    ) -> Result<ImportedPoster, ImportError> {
        let (width, height) = (image.width(), image.height());
        let tiles = self.quantizer.quantize_tiles(image, self.tile_size, self.fill)?;

        let (columns, rows) = match (u32::try_from(tiles.columns()), u32::try_from(tiles.rows())) {
            (Ok(columns), Ok(rows)) => (columns, rows),
            _ => {
                return Err(ImportError::TooLarge {
                    columns: tiles.columns(),
                    rows: tiles.rows(),
                })
            }
        };

        let ids = allocate_ids(first_id, tiles.len())?;
        let poster = PosterGrid::new(columns, rows, ids, meta)?;

        tracing::info!(
            width,
            height,
            columns,
            rows,
            first_id,
            tile_size = self.tile_size,
            "Imported poster"
        );

        Ok(ImportedPoster { poster, tiles })
    }
}

impl Default for ImportService {
    fn default() -> Self {
        Self::new(Quantizer::default(), 128, Color::BLACK)
    }
}

/// Consecutive ids `first..first + count`, failing instead of wrapping.
fn allocate_ids(first: TileId, count: usize) -> Result<Vec<TileId>, ImportError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    let last = TileId::try_from(count - 1)
        .ok()
        .and_then(|offset| first.checked_add(offset))
        .ok_or(ImportError::IdOverflow { first, count })?;
    Ok((first..=last).collect())
}

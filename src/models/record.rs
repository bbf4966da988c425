use serde::{Deserialize, Serialize};
use std::path::Path;

use super::poster::{PosterGrid, PosterMeta, TileId};
use crate::error::RecordError;

/// Persisted form of a [`PosterGrid`].
///
/// Missing `columns`/`rows` mean "no layout". Tiles are stored under
/// `mapsIDs`, and `tileIdentifiers` is accepted on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosterRecord {
    #[serde(default)]
    pub columns: u32,
    #[serde(default)]
    pub rows: u32,
    #[serde(rename = "mapsIDs", alias = "tileIdentifiers")]
    pub tiles: Vec<TileId>,
    #[serde(flatten)]
    pub meta: PosterMeta,
}

/// On-disk encoding, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Yaml,
}

impl RecordFormat {
    /// `.yml` and `.yaml` are YAML, anything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yml") | Some("yaml") => RecordFormat::Yaml,
            _ => RecordFormat::Json,
        }
    }
}

impl PosterRecord {
    pub fn parse(content: &str, format: RecordFormat) -> Result<Self, RecordError> {
        let record = match format {
            RecordFormat::Json => serde_json::from_str(content)?,
            RecordFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(record)
    }

    pub fn encode(&self, format: RecordFormat) -> Result<String, RecordError> {
        let content = match format {
            RecordFormat::Json => serde_json::to_string_pretty(self)?,
            RecordFormat::Yaml => serde_yaml::to_string(self)?,
        };
        Ok(content)
    }

    /// Read a record from disk. The result is not validated yet.
    pub fn read(path: &Path) -> Result<Self, RecordError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, RecordFormat::from_path(path))
    }

    pub fn write(&self, path: &Path) -> Result<(), RecordError> {
        let content = self.encode(RecordFormat::from_path(path))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl From<&PosterGrid> for PosterRecord {
    fn from(grid: &PosterGrid) -> Self {
        Self {
            columns: grid.columns(),
            rows: grid.rows(),
            tiles: grid.tiles().to_vec(),
            meta: grid.meta().clone(),
        }
    }
}

impl TryFrom<PosterRecord> for PosterGrid {
    type Error = RecordError;

    fn try_from(record: PosterRecord) -> Result<Self, Self::Error> {
        Ok(PosterGrid::new(
            record.columns,
            record.rows,
            record.tiles,
            record.meta,
        )?)
    }
}

/// Load and validate a poster record.
pub fn load(path: &Path) -> Result<PosterGrid, RecordError> {
    let record = PosterRecord::read(path)?;
    let grid = PosterGrid::try_from(record)?;
    tracing::debug!(
        path = %path.display(),
        columns = grid.columns(),
        rows = grid.rows(),
        tiles = grid.tile_count(),
        "Loaded poster record"
    );
    Ok(grid)
}

pub fn save(grid: &PosterGrid, path: &Path) -> Result<(), RecordError> {
    PosterRecord::from(grid).write(path)?;
    tracing::debug!(path = %path.display(), tiles = grid.tile_count(), "Saved poster record");
    Ok(())
}

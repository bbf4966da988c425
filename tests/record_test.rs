//! Tests for loading and saving poster records.

mod common;

use common::fixtures;
use poster_wall::error::{PosterError, RecordError};
use poster_wall::models::{record, PosterGrid, PosterMeta, PosterRecord};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_json_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("poster.json");
    let grid = PosterGrid::new(3, 2, fixtures::tiles::ALL.to_vec(), fixtures::named_meta("sunset"))
        .unwrap();

    record::save(&grid, &path).unwrap();
    let loaded = record::load(&path).unwrap();
    assert_eq!(loaded, grid);

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"mapsIDs\""), "unexpected record: {raw}");
}

#[test]
fn test_yaml_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("poster.yaml");
    let grid = fixtures::numbered_poster(2, 3, 40);

    record::save(&grid, &path).unwrap();
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("mapsIDs:"), "unexpected record: {raw}");

    assert_eq!(record::load(&path).unwrap(), grid);
}

#[test]
fn test_load_alias_key() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.json");
    std::fs::write(
        &path,
        r#"{"columns": 2, "rows": 1, "tileIdentifiers": [3, 4], "name": "old"}"#,
    )
    .unwrap();

    let grid = record::load(&path).unwrap();
    assert_eq!(grid.tiles(), &[3, 4]);
    assert_eq!(grid.meta().name.as_deref(), Some("old"));
}

#[test]
fn test_load_without_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("list.yml");
    std::fs::write(&path, "mapsIDs: [7, 8, 9]\n").unwrap();

    let grid = record::load(&path).unwrap();
    assert!(!grid.has_layout());
    assert_eq!(grid.tile_count(), 3);
}

#[test]
fn test_load_rejects_invalid_poster() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"columns": 2, "rows": 1, "mapsIDs": [5, 5]}"#).unwrap();

    match record::load(&path) {
        Err(RecordError::Poster(PosterError::DuplicateTile { id: 5, index: 1 })) => {}
        other => panic!("Expected DuplicateTile, got {other:?}"),
    }
}

#[test]
fn test_load_reports_syntax_and_io_errors() {
    let dir = TempDir::new().unwrap();

    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(record::load(&path), Err(RecordError::Json(_))));

    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "mapsIDs: {").unwrap();
    assert!(matches!(record::load(&path), Err(RecordError::Yaml(_))));

    let path = dir.path().join("missing.json");
    assert!(matches!(record::load(&path), Err(RecordError::Io(_))));
}

#[test]
fn test_record_from_grid_keeps_meta() {
    let meta = PosterMeta {
        owner: Some("sam".to_string()),
        ..Default::default()
    };
    let grid = PosterGrid::unstructured(vec![1], meta.clone()).unwrap();
    let record = PosterRecord::from(&grid);

    assert_eq!(record.columns, 0);
    assert_eq!(record.meta, meta);
}

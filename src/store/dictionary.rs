//! Dictionary files: the persisted form of a tile feature store.
//!
//! A dictionary is a JSON object keyed by tile id. Each value is the tile's
//! feature record:
//!
//! ```json
//! {
//!   "grin.png": { "id": "grin.png", "r": 250, "g": 200, "b": 60,
//!                 "transparentPixelCount": 412, "h": 44, "s": 94, "l": 60 }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{MosaicError, Result};
use crate::types::TileFeature;

use super::TileFeatureStore;

/// Default dictionary file name.
pub const DICTIONARY_FILENAME: &str = "emoji_dict.json";

/// Serialize a store to dictionary JSON.
///
/// # Errors
///
/// Returns [`MosaicError::Build`] when two tiles share an id, since the
/// dictionary can only hold one record per id.
pub fn to_json(store: &TileFeatureStore) -> Result<String> {
    let mut map: BTreeMap<&str, &TileFeature> = BTreeMap::new();
    for tile in store {
        if map.insert(tile.id.as_str(), tile).is_some() {
            return Err(MosaicError::Build {
                message: format!("Duplicate tile id '{}' in store", tile.id),
                help: Some("Tile ids must be unique within a dictionary".to_string()),
            });
        }
    }

    serde_json::to_string_pretty(&map).map_err(|e| MosaicError::Build {
        message: format!("Failed to serialize dictionary: {}", e),
        help: None,
    })
}

/// Parse dictionary JSON into a store ordered by tile id.
///
/// A record whose `id` is missing takes its map key; a record whose `id`
/// disagrees with its key is rejected.
pub fn from_json(content: &str) -> Result<TileFeatureStore> {
    let map: BTreeMap<String, serde_json::Value> =
        serde_json::from_str(content).map_err(|e| MosaicError::Parse {
            message: format!("Invalid dictionary: {}", e),
            help: Some("Regenerate it with `emosaic index`".to_string()),
        })?;

    let mut tiles = Vec::with_capacity(map.len());
    for (key, mut value) in map {
        if let serde_json::Value::Object(record) = &mut value {
            if !record.contains_key("id") && !record.contains_key("filename") {
                record.insert("id".to_string(), serde_json::Value::String(key.clone()));
            }
        }

        let tile: TileFeature = serde_json::from_value(value).map_err(|e| MosaicError::Parse {
            message: format!("Invalid record for '{}': {}", key, e),
            help: None,
        })?;

        if tile.id != key {
            return Err(MosaicError::Parse {
                message: format!("Record keyed '{}' has id '{}'", key, tile.id),
                help: Some("Each record must be stored under its own tile id".to_string()),
            });
        }

        tiles.push(tile);
    }

    Ok(TileFeatureStore::from(tiles))
}

/// Write a store to a dictionary file.
pub fn save(store: &TileFeatureStore, path: &Path) -> Result<()> {
    let json = to_json(store)?;
    fs::write(path, json).map_err(|e| MosaicError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write dictionary: {}", e),
    })
}

/// Read a dictionary file.
pub fn load(path: &Path) -> Result<TileFeatureStore> {
    let content = fs::read_to_string(path).map_err(|e| MosaicError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read dictionary: {}", e),
    })?;
    from_json(&content)
}

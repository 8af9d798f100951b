//! Tile library scanner.
//!
//! Lists the image files directly inside a tile directory, in file name
//! order so that indexing is deterministic.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// File extensions decoded as tiles.
pub const TILE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Result of scanning a tile directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Tile image files, sorted by file name.
    pub tiles: Vec<PathBuf>,
    /// Files that were neither tiles nor excluded.
    pub ignored: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Scan a directory for tile images.
///
/// Subdirectories are not entered; a missing directory yields an empty
/// result.
pub fn scan_tiles(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if path.is_dir() || manifest.is_excluded(path) {
            continue;
        }

        if is_tile_image(path) {
            result.tiles.push(path.to_path_buf());
        } else {
            result.ignored.push(path.to_path_buf());
        }
    }

    result
}

/// Whether the file extension is one of [`TILE_EXTENSIONS`].
pub fn is_tile_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| TILE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// The tile id of a library file: its file name.
pub fn tile_id(path: &Path) -> Option<&str> {
    path.file_name()?.to_str()
}

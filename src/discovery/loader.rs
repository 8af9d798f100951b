//! Image loading for tiles and source photos.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::{MosaicError, Result};
use crate::render::TileSource;

/// Decode any supported image file to RGBA.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| MosaicError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to load image: {}", e),
    })?;
    Ok(img.to_rgba8())
}

/// Tile images read from a library directory on demand.
#[derive(Debug, Clone)]
pub struct TileLibrary {
    root: PathBuf,
}

impl TileLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_of(&self, id: &str) -> PathBuf {
        self.root.join(id)
    }
}

impl TileSource for TileLibrary {
    fn tile(&self, id: &str) -> Result<RgbaImage> {
        let path = self.path_of(id);
        if !path.is_file() {
            return Err(MosaicError::MissingTile { id: id.to_string() });
        }
        load_image(&path)
    }
}

/// Tiles already decoded in memory, keyed by id.
impl TileSource for HashMap<String, RgbaImage> {
    fn tile(&self, id: &str) -> Result<RgbaImage> {
        self.get(id)
            .cloned()
            .ok_or_else(|| MosaicError::MissingTile { id: id.to_string() })
    }
}

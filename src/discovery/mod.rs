//! Project discovery for emosaic.
//!
//! A project is a directory with an optional `mosaic.yaml` manifest. The
//! manifest names the tile library, the dictionary and the output
//! directory; relative paths in it are resolved against the project root.
//!
//! # Example
//!
//! ```ignore
//! use emosaic::discovery::discover;
//!
//! let project = discover(".")?;
//! let scan = project.scan_tiles();
//! println!("Found {} tiles", scan.tiles.len());
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use loader::{load_image, TileLibrary};
pub use manifest::{Manifest, DEFAULT_CELL_SIZE, DEFAULT_SORT_KEY};
pub use scanner::{is_tile_image, scan_tiles, tile_id, ScanResult, TILE_EXTENSIONS};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "mosaic.yaml";

/// A discovered project.
#[derive(Debug)]
pub struct Project {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no mosaic.yaml was found).
    pub manifest: Manifest,

    /// Whether a mosaic.yaml manifest was found.
    pub has_manifest: bool,
}

impl Project {
    /// Resolve a manifest path against the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn tiles_dir(&self) -> PathBuf {
        self.resolve(&self.manifest.tiles)
    }

    pub fn dictionary_path(&self) -> PathBuf {
        self.resolve(&self.manifest.dictionary)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.manifest.output)
    }

    /// Scan the tile library named by the manifest.
    pub fn scan_tiles(&self) -> ScanResult {
        scan_tiles(&self.tiles_dir(), &self.manifest)
    }
}

/// Discover a project rooted at `root`.
///
/// Loads `mosaic.yaml` from the root if present, defaults otherwise.
pub fn discover(root: impl AsRef<Path>) -> Result<Project> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    Ok(Project {
        root,
        manifest,
        has_manifest,
    })
}

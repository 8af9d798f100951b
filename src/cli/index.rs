//! Index command implementation.
//!
//! Scans the tile library, extracts the colour features of every tile and
//! writes them to the dictionary file.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, load_image, scan_tiles, tile_id, MANIFEST_FILENAME};
use crate::error::{MosaicError, Result};
use crate::extract::tile_feature;
use crate::matcher::MIN_STORE_LEN;
use crate::output::{display_path, plural, Printer};
use crate::store::{dictionary, TileFeatureStore};

/// Extract tile features into the dictionary
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Project directory holding mosaic.yaml
    #[arg(long, default_value = ".")]
    pub project: PathBuf,

    /// Tile library directory (overrides mosaic.yaml)
    #[arg(long)]
    pub tiles: Option<PathBuf>,

    /// Dictionary file to write (overrides mosaic.yaml)
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Leave fully transparent tiles out instead of failing
    #[arg(long)]
    pub skip_transparent: bool,
}

pub fn run(args: IndexArgs, printer: &Printer) -> Result<TileFeatureStore> {
    let project = discover(&args.project)?;
    let tiles_dir = args.tiles.clone().unwrap_or_else(|| project.tiles_dir());
    let dictionary_path = args
        .dictionary
        .clone()
        .unwrap_or_else(|| project.dictionary_path());

    if !tiles_dir.is_dir() {
        return Err(MosaicError::Io {
            path: tiles_dir.clone(),
            message: format!("Tile library not found: {}", display_path(&tiles_dir)),
        });
    }

    if !project.has_manifest {
        printer.info("Defaults", &format!("no {} in project", MANIFEST_FILENAME));
    }

    let scan = scan_tiles(&tiles_dir, &project.manifest);
    if !scan.ignored.is_empty() {
        printer.info(
            "Ignoring",
            &format!(
                "{} without a tile image extension",
                plural(scan.ignored.len(), "file", "files")
            ),
        );
    }
    if scan.is_empty() {
        return Err(MosaicError::Build {
            message: format!("No tile images in {}", display_path(&tiles_dir)),
            help: Some("Tiles are read from png, jpg, gif, bmp and webp files".to_string()),
        });
    }

    printer.status(
        "Indexing",
        &format!(
            "{} ({})",
            display_path(&tiles_dir),
            plural(scan.tiles.len(), "tile", "tiles")
        ),
    );

    let mut store = TileFeatureStore::new();
    let mut skipped = 0usize;

    for (done, path) in scan.tiles.iter().enumerate() {
        let id = tile_id(path).ok_or_else(|| MosaicError::Io {
            path: path.clone(),
            message: "Tile file name is not valid UTF-8".to_string(),
        })?;
        let image = load_image(path)?;

        match tile_feature(id, &image) {
            Ok(feature) => store.push(feature),
            Err(MosaicError::DivideByZero { .. }) if args.skip_transparent => {
                printer.warning("Skipping", &format!("{} (fully transparent)", id));
                skipped += 1;
            }
            Err(e) => return Err(e),
        }

        printer.progress("Indexing", done + 1, scan.tiles.len());
    }

    if store.len() < MIN_STORE_LEN {
        printer.warning(
            "Warning",
            &format!(
                "{} indexed; building a mosaic needs at least {}",
                plural(store.len(), "tile", "tiles"),
                MIN_STORE_LEN
            ),
        );
    }

    if let Some(parent) = dictionary_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| MosaicError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create dictionary directory: {}", e),
            })?;
        }
    }
    dictionary::save(&store, &dictionary_path)?;

    let summary = if skipped > 0 {
        format!(
            "{} -> {} ({} skipped)",
            plural(store.len(), "tile", "tiles"),
            display_path(&dictionary_path),
            skipped
        )
    } else {
        format!(
            "{} -> {}",
            plural(store.len(), "tile", "tiles"),
            display_path(&dictionary_path)
        )
    };
    printer.success("Finished", &summary);

    Ok(store)
}

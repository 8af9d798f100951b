//! Init command implementation.
//!
//! Generates a `mosaic.yaml` manifest, pointing it at the tile library it
//! finds in the project directory.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{
    is_tile_image, Manifest, DEFAULT_CELL_SIZE, DEFAULT_SORT_KEY, MANIFEST_FILENAME,
};
use crate::error::{MosaicError, Result};
use crate::output::{display_path, plural, Printer};

/// Initialize a mosaic project by generating a mosaic.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Tile library directory, relative to the project
    #[arg(long)]
    pub tiles: Option<PathBuf>,

    /// Overwrite existing mosaic.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(MosaicError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let defaults = Manifest::default();
    let tiles = match &args.tiles {
        Some(tiles) => tiles.clone(),
        None => {
            printer.status("Scanning", &display_path(&args.path));
            match find_tile_library(&args.path)? {
                Some((dir, count)) => {
                    printer.info(
                        "Discovered",
                        &format!("{} ({})", dir.display(), plural(count, "tile", "tiles")),
                    );
                    dir
                }
                None => defaults.tiles.clone(),
            }
        }
    };

    // Written by hand to keep the commented-out settings
    let mut yaml = String::new();
    yaml.push_str(&format!("tiles: \"{}\"\n", tiles.display()));
    yaml.push_str(&format!("dictionary: {}\n", defaults.dictionary.display()));
    yaml.push_str(&format!("output: {}\n", defaults.output.display()));
    yaml.push_str(&format!("cell_size: {}\n", DEFAULT_CELL_SIZE));
    yaml.push_str(&format!("sort_key: {}\n", DEFAULT_SORT_KEY));
    yaml.push_str("# upscale_below: 500\n");
    yaml.push_str("# lightness_tolerance: 15\n");

    fs::write(&manifest_path, &yaml).map_err(|e| MosaicError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.success("Created", MANIFEST_FILENAME);

    Ok(())
}

/// The direct subdirectory of `root` holding the most tile images, with its
/// image count. Ties go to the first name in sort order.
fn find_tile_library(root: &Path) -> Result<Option<(PathBuf, usize)>> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(root)
        .map_err(|e| MosaicError::Io {
            path: root.to_path_buf(),
            message: format!("Failed to read directory: {}", e),
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();

    let mut best: Option<(PathBuf, usize)> = None;
    for dir in dirs {
        let count = fs::read_dir(&dir)
            .map(|entries| {
                entries
                    .filter_map(|entry| entry.ok())
                    .filter(|entry| is_tile_image(&entry.path()))
                    .count()
            })
            .unwrap_or(0);

        if count > 0 && best.as_ref().map_or(true, |(_, n)| count > *n) {
            let name = dir.strip_prefix(root).unwrap_or(&dir).to_path_buf();
            best = Some((name, count));
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SortKey;
    use tempfile::tempdir;

    fn args(path: &Path) -> InitArgs {
        InitArgs {
            path: path.to_path_buf(),
            tiles: None,
            force: false,
        }
    }

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();

        run(args(dir.path()), &Printer::quiet()).unwrap();

        let manifest = Manifest::load(&dir.path().join("mosaic.yaml")).unwrap();
        assert_eq!(manifest.tiles, PathBuf::from("tiles"));
        assert_eq!(manifest.output, PathBuf::from("dist"));
        assert_eq!(manifest.cell_size, Some(16));
        assert_eq!(manifest.sort_key, Some(SortKey::L));
        assert!(manifest.upscale_below.is_none());
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("mosaic.yaml"), "output: build").unwrap();

        let result = run(args(dir.path()), &Printer::quiet());
        assert!(result.is_err());
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("mosaic.yaml"), "output: build").unwrap();

        let init_args = InitArgs {
            force: true,
            ..args(dir.path())
        };
        run(init_args, &Printer::quiet()).unwrap();

        let content = fs::read_to_string(dir.path().join("mosaic.yaml")).unwrap();
        assert!(content.contains("output: dist"));
    }

    #[test]
    fn test_init_discovers_tile_library() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("photos")).unwrap();
        fs::create_dir_all(dir.path().join("128")).unwrap();
        fs::write(dir.path().join("photos/cat.jpg"), b"").unwrap();
        for name in ["a.png", "b.png", "c.png"] {
            fs::write(dir.path().join("128").join(name), b"").unwrap();
        }

        run(args(dir.path()), &Printer::quiet()).unwrap();

        let manifest = Manifest::load(&dir.path().join("mosaic.yaml")).unwrap();
        assert_eq!(manifest.tiles, PathBuf::from("128"));
    }

    #[test]
    fn test_init_explicit_tiles() {
        let dir = tempdir().unwrap();
        let init_args = InitArgs {
            tiles: Some(PathBuf::from("emoji/72")),
            ..args(dir.path())
        };

        run(init_args, &Printer::quiet()).unwrap();

        let manifest = Manifest::load(&dir.path().join("mosaic.yaml")).unwrap();
        assert_eq!(manifest.tiles, PathBuf::from("emoji/72"));
    }
}

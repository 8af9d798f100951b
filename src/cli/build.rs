//! Build command implementation.
//!
//! Loads the dictionary and a source photo, composes the mosaic and writes
//! it as `<cell size><sort key>.png` in the output directory.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, load_image, TileLibrary};
use crate::error::{MosaicError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{compose_with_progress, output_filename, write_png, ComposeOptions};
use crate::store::dictionary;
use crate::types::SortKey;

/// Build a mosaic from a source photo
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Source photo
    #[arg(required = true)]
    pub source: PathBuf,

    /// Cell size in pixels (at least 1)
    #[arg(long)]
    pub cell: Option<u32>,

    /// Sort key: r, g, b, h, s or l
    #[arg(long)]
    pub sort: Option<String>,

    /// Project directory holding mosaic.yaml
    #[arg(long, default_value = ".")]
    pub project: PathBuf,

    /// Tile library directory (overrides mosaic.yaml)
    #[arg(long)]
    pub tiles: Option<PathBuf>,

    /// Dictionary file (overrides mosaic.yaml)
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Output directory (overrides mosaic.yaml)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<PathBuf> {
    let project = discover(&args.project)?;
    let manifest = &project.manifest;

    let cell_size = args.cell.unwrap_or_else(|| manifest.effective_cell_size());

    let sort_key = match &args.sort {
        Some(key) => key.parse::<SortKey>()?,
        None => manifest.effective_sort_key(),
    };

    let dictionary_path = args
        .dictionary
        .clone()
        .unwrap_or_else(|| project.dictionary_path());
    if !dictionary_path.exists() {
        return Err(MosaicError::Build {
            message: format!("Dictionary not found: {}", display_path(&dictionary_path)),
            help: Some("Run `emosaic index` to build it from the tile library".to_string()),
        });
    }
    let mut store = dictionary::load(&dictionary_path)?;
    printer.info(
        "Loaded",
        &format!(
            "{} from {}",
            plural(store.len(), "tile", "tiles"),
            display_path(&dictionary_path)
        ),
    );

    let library = TileLibrary::new(args.tiles.clone().unwrap_or_else(|| project.tiles_dir()));

    if !args.source.exists() {
        return Err(MosaicError::Io {
            path: args.source.clone(),
            message: format!("File not found: {}", display_path(&args.source)),
        });
    }
    let source = load_image(&args.source)?;

    let options = ComposeOptions::new(cell_size, sort_key)
        .with_upscale_below(manifest.effective_upscale_below())
        .with_tolerance(manifest.effective_tolerance());

    printer.status(
        "Composing",
        &format!(
            "{} ({}x{}, {}px cells, sorted by {})",
            display_path(&args.source),
            source.width(),
            source.height(),
            cell_size,
            sort_key
        ),
    );

    let mosaic = compose_with_progress(&source, &mut store, &library, &options, |done, total| {
        printer.progress("Composing", done, total)
    })?;

    let output_dir = args.output.clone().unwrap_or_else(|| project.output_dir());
    if !output_dir.exists() {
        fs::create_dir_all(&output_dir).map_err(|e| MosaicError::Io {
            path: output_dir.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let output_path = output_dir.join(output_filename(cell_size, sort_key));
    write_png(&mosaic, &output_path)?;

    printer.success(
        "Created",
        &format!(
            "{} ({}x{})",
            display_path(&output_path),
            mosaic.width(),
            mosaic.height()
        ),
    );

    Ok(output_path)
}

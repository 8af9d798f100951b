//! List command implementation.
//!
//! Prints the dictionary in the order the matcher would search it.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::discover;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::store::dictionary;
use crate::types::{SortKey, TileFeature};

/// List dictionary entries in sort order
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Sort key: r, g, b, h, s or l
    #[arg(long)]
    pub sort: Option<String>,

    /// Project directory holding mosaic.yaml
    #[arg(long, default_value = ".")]
    pub project: PathBuf,

    /// Dictionary file (overrides mosaic.yaml)
    #[arg(long)]
    pub dictionary: Option<PathBuf>,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let project = discover(&args.project)?;
    let sort_key = match &args.sort {
        Some(key) => key.parse::<SortKey>()?,
        None => project.manifest.effective_sort_key(),
    };
    let path = args
        .dictionary
        .clone()
        .unwrap_or_else(|| project.dictionary_path());

    let mut store = dictionary::load(&path)?;
    printer.info(
        "Listing",
        &format!(
            "{} from {} by {}",
            plural(store.len(), "tile", "tiles"),
            display_path(&path),
            sort_key
        ),
    );

    for tile in store.sorted_by(sort_key) {
        println!("{}", format_row(tile));
    }

    Ok(())
}

/// One tab-separated line per tile: id, rgb, hsl, transparent pixel count.
fn format_row(tile: &TileFeature) -> String {
    format!(
        "{}\t{} {} {}\t{} {} {}\t{}",
        tile.id, tile.r, tile.g, tile.b, tile.h, tile.s, tile.l, tile.transparent_pixel_count
    )
}

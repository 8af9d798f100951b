//! emosaic - Emoji photomosaic generator
//!
//! A library for rebuilding a photo out of a library of small tile images.
//! Each square cell of the photo is averaged, matched to a tile of similar
//! colour and lightness, and replaced by that tile drawn over the cell's
//! average colour.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod output;
pub mod render;
pub mod store;
pub mod types;

pub use discovery::{discover, Manifest, Project, TileLibrary};
pub use error::{MosaicError, Result};
pub use extract::{average_colour, average_colour_with_alpha, rgb_to_hsl};
pub use matcher::Matcher;
pub use render::{compose, write_png, ComposeOptions, MosaicCell, TileSource};
pub use store::TileFeatureStore;
pub use types::{CellColour, Features, Hsl, Rgb, SortKey, TileFeature};

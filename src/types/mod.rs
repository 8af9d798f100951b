//! Core types for emosaic.
//!
//! This module contains the data structures passed between the extractor,
//! the tile store, the matcher and the compositor.

mod colour;
mod feature;
mod sort_key;

pub use colour::{CellColour, Hsl, Rgb};
pub use feature::{Features, TileFeature};
pub use sort_key::SortKey;

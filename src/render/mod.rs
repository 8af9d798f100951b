//! Rendering module for emosaic.
//!
//! Turns a source photo and a tile store into a mosaic canvas, and writes
//! the result out as PNG.

mod compose;
mod png;

pub use compose::{
    blend_cell, compose, compose_with_progress, mosaic_cells, output_filename, prepare_source,
    resize_tile, ComposeOptions, MosaicCell, TileSource, UPSCALE_BELOW,
};
pub use png::write_png;

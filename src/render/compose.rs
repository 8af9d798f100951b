//! Mosaic composition.
//!
//! The source is cut into square cells. Each cell is averaged, matched to a
//! tile, and replaced by that tile drawn over a flat plane of the cell's
//! average colour, so transparent parts of an emoji take on the colour of
//! the photo underneath. Tiles are resized in premultiplied alpha.

use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use image::imageops::{self, FilterType};
use image::{GenericImageView, RgbaImage};

use crate::error::{MosaicError, Result};
use crate::extract::cell_colour;
use crate::matcher::{Matcher, LIGHTNESS_TOLERANCE};
use crate::store::TileFeatureStore;
use crate::types::{Rgb, SortKey};

/// Sources whose narrower side is below this many pixels are upscaled 2x.
pub const UPSCALE_BELOW: u32 = 500;

/// Resolves tile ids to their images.
pub trait TileSource {
    /// Load the RGBA image of tile `id`.
    fn tile(&self, id: &str) -> Result<RgbaImage>;
}

/// Parameters of one mosaic run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Side of a square cell, in pixels of the (possibly upscaled) source.
    pub cell_size: u32,
    pub sort_key: SortKey,
    /// Upscale sources whose narrower side is below this; 0 disables.
    pub upscale_below: u32,
    pub lightness_tolerance: u8,
}

impl ComposeOptions {
    pub fn new(cell_size: u32, sort_key: SortKey) -> Self {
        Self {
            cell_size,
            sort_key,
            upscale_below: UPSCALE_BELOW,
            lightness_tolerance: LIGHTNESS_TOLERANCE,
        }
    }

    pub fn with_upscale_below(mut self, upscale_below: u32) -> Self {
        self.upscale_below = upscale_below;
        self
    }

    pub fn with_tolerance(mut self, tolerance: u8) -> Self {
        self.lightness_tolerance = tolerance;
        self
    }
}

/// A square region of the output canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicCell {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

/// Cells covering the largest `cell_size`-divisible part of a
/// `width x height` canvas, columns first: x is the outer loop, y the inner.
pub fn mosaic_cells(width: u32, height: u32, cell_size: u32) -> Vec<MosaicCell> {
    if cell_size == 0 {
        return Vec::new();
    }
    let usable_width = width - width % cell_size;
    let usable_height = height - height % cell_size;

    let mut cells = Vec::new();
    for x in (0..usable_width).step_by(cell_size as usize) {
        for y in (0..usable_height).step_by(cell_size as usize) {
            cells.push(MosaicCell {
                x,
                y,
                size: cell_size,
            });
        }
    }
    cells
}

/// Upscale small sources 2x so they still yield a useful number of cells.
pub fn prepare_source(source: &RgbaImage, upscale_below: u32) -> Cow<'_, RgbaImage> {
    let (width, height) = source.dimensions();
    if width.min(height) < upscale_below {
        Cow::Owned(imageops::resize(
            source,
            width * 2,
            height * 2,
            FilterType::Nearest,
        ))
    } else {
        Cow::Borrowed(source)
    }
}

/// Resize a tile to `size x size` with premultiplied alpha.
///
/// Transparent pixels usually carry black colour values; filtering them
/// straight would darken the edges of every emoji.
pub fn resize_tile(tile: &RgbaImage, size: u32) -> RgbaImage {
    let mut premultiplied = tile.clone();
    for pixel in premultiplied.pixels_mut() {
        let alpha = pixel[3] as u32;
        for channel in 0..3 {
            pixel[channel] = ((pixel[channel] as u32 * alpha + 127) / 255) as u8;
        }
    }

    let mut resized = imageops::resize(&premultiplied, size, size, FilterType::Triangle);
    for pixel in resized.pixels_mut() {
        let alpha = pixel[3] as u32;
        for channel in 0..3 {
            pixel[channel] = match alpha {
                0 => 0,
                _ => ((pixel[channel] as u32 * 255 + alpha / 2) / alpha).min(255) as u8,
            };
        }
    }
    resized
}

/// Draw `tile` over an opaque plane of `colour` the same size as the tile.
///
/// The plane is opaque, so the result is too; each channel is the
/// alpha-weighted mix of tile and plane, rounded to nearest.
pub fn blend_cell(colour: Rgb, tile: &RgbaImage) -> RgbaImage {
    let plane = [colour.r, colour.g, colour.b];
    RgbaImage::from_fn(tile.width(), tile.height(), |x, y| {
        let pixel = tile.get_pixel(x, y);
        let alpha = pixel[3] as u32;
        let mut out = colour.to_rgba();
        for channel in 0..3 {
            let mixed = pixel[channel] as u32 * alpha + plane[channel] as u32 * (255 - alpha);
            out[channel] = ((mixed + 127) / 255) as u8;
        }
        out
    })
}

/// File name of a mosaic: cell size followed by sort key, e.g. `16l.png`.
pub fn output_filename(cell_size: u32, sort_key: SortKey) -> String {
    format!("{}{}.png", cell_size, sort_key)
}

/// Build a mosaic of `source` from the tiles in `store`.
///
/// # Errors
///
/// Fails with [`MosaicError::DivideByZero`] for a zero cell size,
/// [`MosaicError::InvalidArgument`] when the source is smaller than one
/// cell, and with whatever the matcher or the tile source reports.
pub fn compose<T>(
    source: &RgbaImage,
    store: &mut TileFeatureStore,
    tiles: &T,
    options: &ComposeOptions,
) -> Result<RgbaImage>
where
    T: TileSource + ?Sized,
{
    compose_with_progress(source, store, tiles, options, |_, _| {})
}

/// [`compose`], calling `progress(done, total)` after every cell.
pub fn compose_with_progress<T, F>(
    source: &RgbaImage,
    store: &mut TileFeatureStore,
    tiles: &T,
    options: &ComposeOptions,
    mut progress: F,
) -> Result<RgbaImage>
where
    T: TileSource + ?Sized,
    F: FnMut(usize, usize),
{
    let cell_size = options.cell_size;
    if cell_size == 0 {
        return Err(MosaicError::DivideByZero {
            context: "cutting the source into cells of size 0".to_string(),
            help: Some("The cell size must be at least 1".to_string()),
        });
    }

    let prepared = prepare_source(source, options.upscale_below);
    let source: &RgbaImage = &prepared;
    let (width, height) = source.dimensions();
    let usable_width = width - width % cell_size;
    let usable_height = height - height % cell_size;

    if usable_width == 0 || usable_height == 0 {
        return Err(MosaicError::InvalidArgument {
            message: format!(
                "Source of {}x{} is smaller than one {}px cell",
                width, height, cell_size
            ),
            help: Some("Use a smaller cell size".to_string()),
        });
    }

    let matcher = Matcher::with_tolerance(options.lightness_tolerance);
    let mut canvas = RgbaImage::new(usable_width, usable_height);
    let mut resized: HashMap<String, RgbaImage> = HashMap::new();

    let cells = mosaic_cells(width, height, cell_size);
    let total = cells.len();

    for (done, cell) in cells.iter().enumerate() {
        let region = source.view(cell.x, cell.y, cell.size, cell.size);
        let colour = cell_colour(&*region)?;

        let id = matcher.find(store, &colour, options.sort_key)?.id.clone();
        let tile = match resized.entry(id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let image = tiles.tile(entry.key())?;
                entry.insert(resize_tile(&image, cell_size))
            }
        };

        let block = blend_cell(colour.rgb, tile);
        imageops::replace(&mut canvas, &block, cell.x as i64, cell.y as i64);

        progress(done + 1, total);
    }

    Ok(canvas)
}

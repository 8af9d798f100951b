//! Colour feature extraction.
//!
//! Averages pixel regions into a single colour and converts it to HSL. Tiles
//! are averaged with [`average_colour_with_alpha`] so transparent padding
//! around an emoji does not darken it; source cells use [`average_colour`].

mod average;
mod hsl;

pub use average::{average_colour, average_colour_with_alpha, AlphaAverage};
pub use hsl::rgb_to_hsl;

use image::{Rgba, RgbaImage};

use crate::error::Result;
use crate::types::{CellColour, TileFeature};

/// Extract the feature record of one tile image.
pub fn tile_feature(id: &str, image: &RgbaImage) -> Result<TileFeature> {
    let AlphaAverage {
        colour,
        transparent_pixels,
    } = average_colour_with_alpha(image)?;
    Ok(TileFeature::new(
        id,
        colour,
        rgb_to_hsl(colour),
        transparent_pixels,
    ))
}

/// Average colour of a source region, with HSL derived.
pub fn cell_colour<I>(region: &I) -> Result<CellColour>
where
    I: image::GenericImageView<Pixel = Rgba<u8>>,
{
    Ok(CellColour::from_rgb(average_colour(region)?))
}

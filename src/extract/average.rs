//! Region averaging.

use image::{GenericImageView, Rgba};

use crate::error::{MosaicError, Result};
use crate::types::Rgb;

/// Result of an alpha-aware average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaAverage {
    /// Mean of the pixels with non-zero alpha.
    pub colour: Rgb,
    /// Number of pixels with alpha 0.
    pub transparent_pixels: u32,
}

#[derive(Default)]
struct ChannelSums {
    r: u64,
    g: u64,
    b: u64,
}

impl ChannelSums {
    fn add(&mut self, pixel: &Rgba<u8>) {
        self.r += pixel[0] as u64;
        self.g += pixel[1] as u64;
        self.b += pixel[2] as u64;
    }

    // Integer division truncates, matching a floor of the non-negative mean.
    fn mean(&self, count: u64) -> Rgb {
        Rgb::new(
            (self.r / count) as u8,
            (self.g / count) as u8,
            (self.b / count) as u8,
        )
    }
}

/// Average colour over every pixel of the region, alpha ignored.
///
/// # Errors
///
/// Returns [`MosaicError::DivideByZero`] for a region with no pixels.
pub fn average_colour<I>(region: &I) -> Result<Rgb>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = region.dimensions();
    let count = width as u64 * height as u64;
    if count == 0 {
        return Err(MosaicError::DivideByZero {
            context: format!("averaging an empty {}x{} region", width, height),
            help: Some("The cell size must be at least 1".to_string()),
        });
    }

    let mut sums = ChannelSums::default();
    for (_, _, pixel) in region.pixels() {
        sums.add(&pixel);
    }

    Ok(sums.mean(count))
}

/// Average colour over the pixels whose alpha is non-zero.
///
/// A fully transparent region has no colour to average and is an error; the
/// caller decides whether to skip the tile or abort.
///
/// # Errors
///
/// Returns [`MosaicError::DivideByZero`] when every pixel has alpha 0 (or
/// the region is empty).
pub fn average_colour_with_alpha<I>(region: &I) -> Result<AlphaAverage>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let mut sums = ChannelSums::default();
    let mut opaque = 0u64;
    let mut transparent = 0u32;

    for (_, _, pixel) in region.pixels() {
        if pixel[3] == 0 {
            transparent += 1;
        } else {
            sums.add(&pixel);
            opaque += 1;
        }
    }

    if opaque == 0 {
        return Err(MosaicError::DivideByZero {
            context: format!(
                "averaging a region with no visible pixels ({} transparent)",
                transparent
            ),
            help: Some("Fully transparent tiles cannot be matched by colour".to_string()),
        });
    }

    Ok(AlphaAverage {
        colour: sums.mean(opaque),
        transparent_pixels: transparent,
    })
}

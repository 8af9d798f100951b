//! Colour types shared by the extractor, matcher and compositor.

use std::fmt;

use image::Rgba;

use super::feature::Features;

/// An opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Convert to a fully opaque RGBA pixel.
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Hue in whole degrees, saturation and lightness in whole percent.
///
/// Components are truncated, never rounded, so two conversions of the same
/// RGB value always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Average colour of one mosaic cell, in both colour spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellColour {
    pub rgb: Rgb,
    pub hsl: Hsl,
}

impl CellColour {
    /// Build a cell colour, deriving HSL from the RGB average.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            rgb,
            hsl: crate::extract::rgb_to_hsl(rgb),
        }
    }
}

impl Features for CellColour {
    fn rgb(&self) -> Rgb {
        self.rgb
    }

    fn hsl(&self) -> Hsl {
        self.hsl
    }
}

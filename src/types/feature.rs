//! Tile feature records and the field access they share with cell colours.

use serde::{Deserialize, Serialize};

use super::colour::{Hsl, Rgb};
use super::sort_key::SortKey;

/// Numeric feature fields, readable by [`SortKey`].
pub trait Features {
    fn rgb(&self) -> Rgb;

    fn hsl(&self) -> Hsl;

    /// The field named by `key`.
    fn value(&self, key: SortKey) -> i32 {
        match key {
            SortKey::R => self.rgb().r as i32,
            SortKey::G => self.rgb().g as i32,
            SortKey::B => self.rgb().b as i32,
            SortKey::H => self.hsl().h as i32,
            SortKey::S => self.hsl().s as i32,
            SortKey::L => self.hsl().l as i32,
        }
    }

    fn lightness(&self) -> i32 {
        self.value(SortKey::L)
    }
}

/// Colour features of one library tile.
///
/// The serialized field names are the dictionary format. `filename` and
/// `zero_alpha_count` are accepted on read for dictionaries written by older
/// tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileFeature {
    /// Tile identifier, the file name within the tile library.
    #[serde(alias = "filename")]
    pub id: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Pixels with alpha 0, excluded from the colour averages.
    #[serde(rename = "transparentPixelCount", alias = "zero_alpha_count")]
    pub transparent_pixel_count: u32,
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl TileFeature {
    pub fn new(id: impl Into<String>, rgb: Rgb, hsl: Hsl, transparent_pixel_count: u32) -> Self {
        Self {
            id: id.into(),
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            transparent_pixel_count,
            h: hsl.h,
            s: hsl.s,
            l: hsl.l,
        }
    }
}

impl Features for TileFeature {
    fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    fn hsl(&self) -> Hsl {
        Hsl::new(self.h, self.s, self.l)
    }
}

//! PNG output for finished mosaics.

use std::path::Path;

use image::RgbaImage;

use crate::error::{MosaicError, Result};

/// Write an RGBA image to a PNG file.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| MosaicError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}

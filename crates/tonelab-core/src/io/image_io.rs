use std::path::Path;

use image::{ColorType, DynamicImage, GrayImage, ImageFormat, RgbImage};
use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::{Result, ToneError};

/// How to convert a decoded image into a [`PixelBuffer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorLoad {
    /// One channel for luma sources, three otherwise.
    #[default]
    Auto,
    /// Always convert to a single luma channel.
    Gray,
    /// Always convert to three RGB channels.
    Rgb,
}

/// Load an image file as an 8-bit buffer.
pub fn load_buffer(path: &Path, mode: ColorLoad) -> Result<PixelBuffer> {
    let img = image::open(path)?;
    buffer_from_image(&img, mode)
}

/// Convert a decoded image into an 8-bit buffer.
pub fn buffer_from_image(img: &DynamicImage, mode: ColorLoad) -> Result<PixelBuffer> {
    let gray = match mode {
        ColorLoad::Gray => true,
        ColorLoad::Rgb => false,
        ColorLoad::Auto => matches!(
            img.color(),
            ColorType::L8 | ColorType::La8 | ColorType::L16 | ColorType::La16
        ),
    };

    if gray {
        let luma = img.to_luma8();
        let (w, h) = luma.dimensions();
        PixelBuffer::from_interleaved(w as usize, h as usize, 1, luma.as_raw())
    } else {
        let rgb = img.to_rgb8();
        let (w, h) = rgb.dimensions();
        PixelBuffer::from_interleaved(w as usize, h as usize, 3, rgb.as_raw())
    }
}

/// Save a buffer as an 8-bit gray or RGB raster, choosing the format from the
/// file extension (PNG when unknown).
pub fn save_buffer(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    let (w, h) = (buffer.width() as u32, buffer.height() as u32);
    let raw = buffer.to_interleaved();

    let img = if buffer.is_rgb() {
        RgbImage::from_raw(w, h, raw).map(DynamicImage::ImageRgb8)
    } else {
        GrayImage::from_raw(w, h, raw).map(DynamicImage::ImageLuma8)
    }
    .ok_or(ToneError::InvalidDimensions {
        width: buffer.width(),
        height: buffer.height(),
    })?;

    img.save_with_format(path, format)?;
    Ok(())
}

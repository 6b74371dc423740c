use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::filters::equalize::equalize;
use crate::filters::stretch::linear_stretch;

use super::hls::{merge_hls, split_hls, HlsPlanes};

/// Colour contrast enhancement in HLS space.
///
/// Saturation is histogram-equalized, lightness is linearly stretched to the
/// full [0, 255] range and hue is passed through untouched.
pub fn enhance_color(buffer: &PixelBuffer) -> Result<PixelBuffer> {
    let planes = split_hls(buffer)?;

    let (lightness, saturation) = rayon::join(
        || linear_stretch(&planes.lightness, 0, 255),
        || equalize(&planes.saturation),
    );
    let lightness = lightness?;

    debug!(
        width = buffer.width(),
        height = buffer.height(),
        lightness_range = ?lightness.min_max(),
        "Colour enhancement"
    );

    merge_hls(&HlsPlanes {
        hue: planes.hue,
        lightness,
        saturation,
    })
}

use ndarray::Array2;
use tracing::debug;

use crate::buffer::{Channel, PixelBuffer};
use crate::error::{Result, ToneError};
use crate::filters::clip_to_u8;

/// Simulate a lower spatial resolution.
///
/// The buffer is area-averaged down to `percent`% of its size, then blown back
/// up to the original size with nearest-neighbour sampling, giving the blocky
/// look of a low-resolution capture at the original dimensions.
pub fn reduce_resolution(buffer: &PixelBuffer, percent: u32) -> Result<PixelBuffer> {
    if !(1..=100).contains(&percent) {
        return Err(ToneError::invalid(
            "percent",
            format!("{percent} is outside [1, 100]"),
        ));
    }
    let (w, h) = (buffer.width(), buffer.height());
    let small_w = w * percent as usize / 100;
    let small_h = h * percent as usize / 100;
    if small_w == 0 || small_h == 0 {
        return Err(ToneError::invalid(
            "percent",
            format!("{percent}% of {w}x{h} leaves no pixels"),
        ));
    }
    debug!(w, h, small_w, small_h, "Reducing resolution");

    buffer.map_channels(|channel| {
        let small = box_downsample(&channel.data.mapv(|v| v as f64), small_w, small_h);
        let data = Array2::from_shape_fn((h, w), |(row, col)| {
            let src_row = (2 * row + 1) * small_h / (2 * h);
            let src_col = (2 * col + 1) * small_w / (2 * w);
            clip_to_u8(small[[src_row, src_col]])
        });
        Channel::new(data)
    })
}

/// Area-average resize to `(new_h, new_w)`; each output sample is the
/// coverage-weighted mean of the input samples under it.
fn box_downsample(data: &Array2<f64>, new_w: usize, new_h: usize) -> Array2<f64> {
    let (h, w) = data.dim();
    let col_weights = box_weights(w, new_w);
    let row_weights = box_weights(h, new_h);

    let horizontal: Array2<f64> = Array2::from_shape_fn((h, new_w), |(row, col)| {
        col_weights[col]
            .iter()
            .map(|&(src, wt)| data[[row, src]] * wt)
            .sum::<f64>()
    });
    Array2::from_shape_fn((new_h, new_w), |(row, col)| {
        row_weights[row]
            .iter()
            .map(|&(src, wt)| horizontal[[src, col]] * wt)
            .sum::<f64>()
    })
}

/// For each destination index, the source indices it covers and their
/// normalised overlap weights.
fn box_weights(src_len: usize, dst_len: usize) -> Vec<Vec<(usize, f64)>> {
    let scale = src_len as f64 / dst_len as f64;
    (0..dst_len)
        .map(|d| {
            let start = d as f64 * scale;
            let end = (d + 1) as f64 * scale;
            let first = start.floor() as usize;
            let last = (end.ceil() as usize).min(src_len);
            (first..last)
                .filter_map(|s| {
                    let overlap = end.min((s + 1) as f64) - start.max(s as f64);
                    (overlap > 0.0).then_some((s, overlap / scale))
                })
                .collect()
        })
        .collect()
}

use tracing::debug;

use crate::buffer::Channel;
use crate::consts::LEVELS;
use crate::error::{Result, ToneError};
use crate::histogram::{compute_histogram, Histogram};

use super::lut::Lut;
use super::{clip_to_u8, validate_percentile, validate_range};

/// Linear stretch: maps the channel's own [min, max] onto [dst_min, dst_max].
///
/// A flat channel has no source range to map from; its samples are clipped
/// into the destination range instead.
pub fn linear_stretch(channel: &Channel, dst_min: u8, dst_max: u8) -> Result<Channel> {
    validate_range("dst", dst_min, dst_max)?;
    let (src_min, src_max) = channel.min_max();
    debug!(src_min, src_max, dst_min, dst_max, "Linear stretch");
    Ok(affine_lut(src_min as f32, src_max as f32, dst_min, dst_max).apply(channel))
}

/// Shrink the channel into a (usually narrower) destination range.
///
/// Same mapping as [`linear_stretch`]; the name records the caller's intent.
pub fn shrink(channel: &Channel, dst_min: u8, dst_max: u8) -> Result<Channel> {
    linear_stretch(channel, dst_min, dst_max)
}

/// Map an explicit source range onto a destination range.
///
/// Samples outside `[src_min, src_max]` extrapolate and are then clipped.
pub fn linear_map(
    channel: &Channel,
    src_min: u8,
    src_max: u8,
    dst_min: u8,
    dst_max: u8,
) -> Result<Channel> {
    validate_range("src", src_min, src_max)?;
    validate_range("dst", dst_min, dst_max)?;
    Ok(affine_lut(src_min as f32, src_max as f32, dst_min, dst_max).apply(channel))
}

fn affine_lut(src_min: f32, src_max: f32, dst_min: u8, dst_max: u8) -> Lut {
    if src_max == src_min {
        return Lut::from_fn(|v| v.clamp(dst_min, dst_max));
    }
    let scale = (dst_max as f32 - dst_min as f32) / (src_max - src_min);
    Lut::from_fn(|v| clip_to_u8((v as f32 - src_min) * scale + dst_min as f32))
}

/// Percentile of the channel's samples using linear interpolation between
/// adjacent sorted samples (position `p / 100 * (n - 1)`).
pub fn percentile(channel: &Channel, pct: f64) -> Result<f64> {
    percentile_of_histogram(&compute_histogram(channel), pct)
}

/// Same as [`percentile`], read from a precomputed histogram.
///
/// Sorted samples are located through cumulative counts, so no sort is needed.
pub fn percentile_of_histogram(hist: &Histogram, pct: f64) -> Result<f64> {
    validate_percentile("percentile", pct)?;
    let n = hist.total();
    if n == 0 {
        return Err(ToneError::invalid("histogram", "no samples"));
    }

    let pos = pct / 100.0 * (n - 1) as f64;
    let lo_idx = pos.floor() as u64;
    let hi_idx = (lo_idx + 1).min(n - 1);
    let frac = pos - lo_idx as f64;

    let lo = nth_level(hist.counts(), lo_idx) as f64;
    let hi = nth_level(hist.counts(), hi_idx) as f64;
    Ok(lo + frac * (hi - lo))
}

/// Level of the `k`-th smallest sample (0-based).
fn nth_level(counts: &[u64; LEVELS], k: u64) -> u8 {
    let mut seen = 0u64;
    for (level, &c) in counts.iter().enumerate() {
        seen += c;
        if seen > k {
            return level as u8;
        }
    }
    u8::MAX
}

/// Percentile stretch: maps [P(low_pct), P(high_pct)] onto [out_min, out_max].
///
/// Robust to outliers. When both percentiles coincide there is no range to
/// map from; the channel is only clipped into `[out_min, out_max]`. Samples
/// outside the percentile range still move in that case: an outlier above
/// `out_max` is pulled down to `out_max`.
pub fn percentile_stretch(
    channel: &Channel,
    low_pct: f64,
    high_pct: f64,
    out_min: u8,
    out_max: u8,
) -> Result<Channel> {
    validate_percentile("low_pct", low_pct)?;
    validate_percentile("high_pct", high_pct)?;
    if high_pct < low_pct {
        return Err(ToneError::invalid(
            "high_pct",
            format!("{high_pct} is below low_pct ({low_pct})"),
        ));
    }
    validate_range("out", out_min, out_max)?;

    let hist = compute_histogram(channel);
    let lo = percentile_of_histogram(&hist, low_pct)?;
    let hi = percentile_of_histogram(&hist, high_pct)?;
    debug!(lo, hi, out_min, out_max, "Percentile stretch");

    if hi == lo {
        return Ok(Lut::from_fn(|v| v.clamp(out_min, out_max)).apply(channel));
    }

    let scale = (out_max as f64 - out_min as f64) / (hi - lo);
    let lut = Lut::from_fn(|v| clip_to_u8((v as f64 - lo) * scale + out_min as f64));
    Ok(lut.apply(channel))
}

use crate::buffer::Channel;
use crate::histogram::{compute_cdf, compute_histogram, Histogram};

use super::clip_to_u8;
use super::lut::Lut;

/// Global equalization table: `lut[r] = round(255 * cdf[r])`.
pub fn equalization_lut(hist: &Histogram) -> Lut {
    let cdf = compute_cdf(hist);
    Lut::from_fn(|r| clip_to_u8(255.0 * cdf.get(r)))
}

/// Histogram equalization of a channel using its own CDF.
pub fn equalize(channel: &Channel) -> Channel {
    equalization_lut(&compute_histogram(channel)).apply(channel)
}

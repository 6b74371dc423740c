//! Adaptive contrast enhancement (ACE).
//!
//! Each pixel gets a gain driven by its neighbourhood statistics:
//!
//! `E(r,c) = k1 * (m_I / sigma_l(r,c)) * (I(r,c) - m_l(r,c) + k2 * m_l(r,c))`
//!
//! where `I` is the channel scaled to [0, 1], `m_I` its global mean, and
//! `m_l` / `sigma_l` the mean and standard deviation over a square window.

use ndarray::{Array2, ArrayView1, ArrayViewMut1, Axis, Zip};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::buffer::Channel;
use crate::consts::{
    ACE_VARIANCE_FLOOR, DEFAULT_ACE_K1, DEFAULT_ACE_K2, DEFAULT_ACE_WINDOW,
    PARALLEL_PIXEL_THRESHOLD,
};
use crate::error::{Result, ToneError};
use crate::filters::clip_to_u8;

/// Parameters for adaptive contrast enhancement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AceParams {
    /// Global gain, >= 0.
    pub k1: f64,
    /// Share of the local mean kept in the output, in [0, 1].
    pub k2: f64,
    /// Side length of the square neighbourhood. Must be odd.
    pub window_size: usize,
}

impl Default for AceParams {
    fn default() -> Self {
        Self {
            k1: DEFAULT_ACE_K1,
            k2: DEFAULT_ACE_K2,
            window_size: DEFAULT_ACE_WINDOW,
        }
    }
}

impl AceParams {
    pub fn validate(&self) -> Result<()> {
        if !self.k1.is_finite() || self.k1 < 0.0 {
            return Err(ToneError::invalid("k1", format!("{} must be >= 0", self.k1)));
        }
        if !self.k2.is_finite() || !(0.0..=1.0).contains(&self.k2) {
            return Err(ToneError::invalid(
                "k2",
                format!("{} is outside [0, 1]", self.k2),
            ));
        }
        if self.window_size == 0 || self.window_size % 2 == 0 {
            return Err(ToneError::invalid(
                "window_size",
                format!("{} must be a positive odd number", self.window_size),
            ));
        }
        Ok(())
    }
}

/// Apply ACE to one channel.
///
/// Borders are handled by reflect-101 (`c b | a b c | b a`). A flat region
/// has zero local variance; the variance floor keeps the gain finite, so flat
/// areas saturate rather than produce NaN.
pub fn adaptive_contrast_enhancement(channel: &Channel, params: &AceParams) -> Result<Channel> {
    params.validate()?;

    let intensity = channel.data.mapv(|v| v as f64 / 255.0);
    let global_mean = intensity.mean().unwrap_or(0.0);
    let radius = params.window_size / 2;

    let local_mean = box_mean(&intensity, radius);
    let local_sq_mean = box_mean(&intensity.mapv(|v| v * v), radius);

    debug!(
        k1 = params.k1,
        k2 = params.k2,
        window = params.window_size,
        global_mean,
        "Adaptive contrast enhancement"
    );

    let (k1, k2) = (params.k1, params.k2);
    let data = Zip::from(&intensity)
        .and(&local_mean)
        .and(&local_sq_mean)
        .map_collect(|&i, &m, &sq| {
            let sigma = (sq - m * m).max(ACE_VARIANCE_FLOOR).sqrt();
            let e = k1 * (global_mean / sigma) * (i - m + k2 * m);
            clip_to_u8(e.clamp(0.0, 1.0) * 255.0)
        });

    Channel::new(data)
}

/// Mean over a `(2 * radius + 1)` square window, computed as a row pass
/// followed by a column pass.
pub fn box_mean(data: &Array2<f64>, radius: usize) -> Array2<f64> {
    let rows = box_pass(data, radius, Axis(1));
    box_pass(&rows, radius, Axis(0))
}

fn box_pass(data: &Array2<f64>, radius: usize, axis: Axis) -> Array2<f64> {
    let (h, w) = data.dim();
    let mut out = Array2::<f64>::zeros((h, w));
    let r = radius as isize;
    let window = (2 * radius + 1) as f64;

    let filter_lane = |src: ArrayView1<f64>, mut dst: ArrayViewMut1<f64>| {
        let n = src.len();
        for i in 0..n {
            let mut sum = 0.0;
            for k in -r..=r {
                sum += src[reflect_101(i as isize + k, n)];
            }
            dst[i] = sum / window;
        }
    };

    let zip = Zip::from(data.lanes(axis)).and(out.lanes_mut(axis));
    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        zip.par_for_each(filter_lane);
    } else {
        zip.for_each(filter_lane);
    }
    out
}

/// Fold an out-of-range index back into `0..n`, mirroring about the edge
/// samples without repeating them.
fn reflect_101(i: isize, n: usize) -> usize {
    if n == 1 {
        return 0;
    }
    let period = 2 * (n as isize - 1);
    let m = i.rem_euclid(period);
    if m >= n as isize {
        (period - m) as usize
    } else {
        m as usize
    }
}

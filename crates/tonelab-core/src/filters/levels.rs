use serde::{Deserialize, Serialize};

use crate::buffer::Channel;
use crate::consts::{DEFAULT_PIECEWISE_HIGH, DEFAULT_PIECEWISE_LOW, DEFAULT_PIECEWISE_THRESHOLD};
use crate::error::Result;

use super::lut::Lut;
use super::{clip_to_u8, validate_range};

/// Add `offset` to every sample, saturating at 0 and 255.
///
/// Any offset is accepted; magnitudes beyond 255 simply saturate.
pub fn slide(channel: &Channel, offset: i32) -> Channel {
    Lut::from_fn(|v| clip_to_u8(v as i64 + offset as i64)).apply(channel)
}

/// Two-segment tone curve split at `threshold`.
///
/// `low` and `high` are the destination ranges of the `<= threshold` and
/// `> threshold` segments. They are independent: `low.1` need not meet
/// `high.0`, so the curve may jump at the threshold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PiecewiseParams {
    pub threshold: u8,
    pub low: (u8, u8),
    pub high: (u8, u8),
}

impl Default for PiecewiseParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_PIECEWISE_THRESHOLD,
            low: DEFAULT_PIECEWISE_LOW,
            high: DEFAULT_PIECEWISE_HIGH,
        }
    }
}

impl PiecewiseParams {
    pub fn validate(&self) -> Result<()> {
        validate_range("low", self.low.0, self.low.1)?;
        validate_range("high", self.high.0, self.high.1)
    }
}

/// Piecewise-linear mapping.
///
/// Samples `<= threshold` map from `[src_min, min(threshold, src_max)]` onto
/// `low`; a collapsed source range sends them all to `low.0`. Samples
/// `> threshold` map from `[max(threshold + 1, src_min), src_max]` onto `high`;
/// a collapsed source range sends them all to `high.1`.
pub fn piecewise_linear(channel: &Channel, params: &PiecewiseParams) -> Result<Channel> {
    params.validate()?;
    let (src_min, src_max) = channel.min_max();
    let t = params.threshold as f32;
    let (src_min, src_max) = (src_min as f32, src_max as f32);
    let (a, b) = (params.low.0 as f32, params.low.1 as f32);
    let (c, d) = (params.high.0 as f32, params.high.1 as f32);

    let lo_from = src_min;
    let lo_to = t.min(src_max);
    let hi_from = (t + 1.0).max(src_min);
    let hi_to = src_max;

    let lut = Lut::from_fn(|v| {
        let x = v as f32;
        if v <= params.threshold {
            if lo_to <= lo_from {
                params.low.0
            } else {
                clip_to_u8((x - lo_from) / (lo_to - lo_from) * (b - a) + a)
            }
        } else if hi_to <= hi_from {
            params.high.1
        } else {
            clip_to_u8((x - hi_from) / (hi_to - hi_from) * (d - c) + c)
        }
    });
    Ok(lut.apply(channel))
}

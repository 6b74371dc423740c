use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::buffer::{Channel, PixelBuffer};
use crate::error::{Result, ToneError};

use super::hls::rgb_planes;

/// One plane of an RGB buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RgbChannel {
    Red,
    Green,
    Blue,
}

impl RgbChannel {
    pub fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

impl std::fmt::Display for RgbChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "Red"),
            Self::Green => write!(f, "Green"),
            Self::Blue => write!(f, "Blue"),
        }
    }
}

impl FromStr for RgbChannel {
    type Err = ToneError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Self::Red),
            "g" | "green" => Ok(Self::Green),
            "b" | "blue" => Ok(Self::Blue),
            other => Err(ToneError::invalid(
                "channel",
                format!("unknown channel `{other}` (expected r, g or b)"),
            )),
        }
    }
}

/// Keep one plane of an RGB buffer and zero the other two.
pub fn isolate_channel(buffer: &PixelBuffer, keep: RgbChannel) -> Result<PixelBuffer> {
    let planes = rgb_planes(buffer)?;
    let blank = Channel::filled(buffer.width(), buffer.height(), 0)?;

    let mut out = [blank.clone(), blank.clone(), blank];
    out[keep.index()] = planes[keep.index()].clone();
    let [r, g, b] = out;
    PixelBuffer::rgb(r, g, b)
}

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ace::AceParams;
use crate::color::channels::RgbChannel;
use crate::consts::{DEFAULT_HIGH_PERCENTILE, DEFAULT_LOW_PERCENTILE};
use crate::filters::levels::PiecewiseParams;
use crate::io::image_io::ColorLoad;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Image whose histogram `MatchHistogram` steps aim for.
    #[serde(default)]
    pub reference: Option<PathBuf>,
    #[serde(default)]
    pub color_load: ColorLoad,
    #[serde(default)]
    pub steps: Vec<TransformStep>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.png"),
            output: PathBuf::from("result.png"),
            reference: None,
            color_load: ColorLoad::Auto,
            steps: vec![
                TransformStep::PercentileStretch {
                    low_pct: DEFAULT_LOW_PERCENTILE,
                    high_pct: DEFAULT_HIGH_PERCENTILE,
                    out_min: 0,
                    out_max: 255,
                },
                TransformStep::Ace(AceParams::default()),
            ],
        }
    }
}

/// One transform in a pipeline. Single-channel transforms applied to an RGB
/// buffer run on each plane independently.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TransformStep {
    LinearStretch { dst_min: u8, dst_max: u8 },
    Shrink { dst_min: u8, dst_max: u8 },
    LinearMap {
        src_min: u8,
        src_max: u8,
        dst_min: u8,
        dst_max: u8,
    },
    Slide(i32),
    Piecewise(PiecewiseParams),
    PercentileStretch {
        low_pct: f64,
        high_pct: f64,
        out_min: u8,
        out_max: u8,
    },
    Equalize,
    MatchHistogram,
    Ace(AceParams),
    ColorEnhance,
    IsolateChannel(RgbChannel),
    ReduceResolution(u32),
}

impl std::fmt::Display for TransformStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LinearStretch { dst_min, dst_max } => {
                write!(f, "Linear Stretch [{dst_min}, {dst_max}]")
            }
            Self::Shrink { dst_min, dst_max } => write!(f, "Shrink [{dst_min}, {dst_max}]"),
            Self::LinearMap {
                src_min,
                src_max,
                dst_min,
                dst_max,
            } => write!(
                f,
                "Linear Map [{src_min}, {src_max}] -> [{dst_min}, {dst_max}]"
            ),
            Self::Slide(offset) => write!(f, "Slide ({offset:+})"),
            Self::Piecewise(p) => write!(
                f,
                "Piecewise (t={}, low={:?}, high={:?})",
                p.threshold, p.low, p.high
            ),
            Self::PercentileStretch {
                low_pct,
                high_pct,
                out_min,
                out_max,
            } => write!(
                f,
                "Percentile Stretch ({low_pct}%-{high_pct}% -> [{out_min}, {out_max}])"
            ),
            Self::Equalize => write!(f, "Equalize"),
            Self::MatchHistogram => write!(f, "Match Histogram"),
            Self::Ace(p) => write!(
                f,
                "ACE (k1={}, k2={}, window={})",
                p.k1, p.k2, p.window_size
            ),
            Self::ColorEnhance => write!(f, "Color Enhance"),
            Self::IsolateChannel(c) => write!(f, "Isolate {c}"),
            Self::ReduceResolution(pct) => write!(f, "Reduce Resolution ({pct}%)"),
        }
    }
}

use crate::ace::adaptive_contrast_enhancement;
use crate::buffer::{Channel, PixelBuffer};
use crate::color::channels::isolate_channel;
use crate::color::enhance::enhance_color;
use crate::error::{Result, ToneError};
use crate::filters::equalize::equalize;
use crate::filters::levels::{piecewise_linear, slide};
use crate::filters::stretch::{linear_map, linear_stretch, percentile_stretch, shrink};
use crate::resample::reduce_resolution;
use crate::specification::specification_map;

use super::config::TransformStep;

/// Apply a single transform step to a buffer.
///
/// `reference` is required by `MatchHistogram` only. When both buffers are
/// RGB, each plane is matched to the corresponding reference plane; otherwise
/// every plane is matched to the reference's first plane.
pub fn apply_step(
    buffer: &PixelBuffer,
    step: &TransformStep,
    reference: Option<&PixelBuffer>,
) -> Result<PixelBuffer> {
    match step {
        TransformStep::LinearStretch { dst_min, dst_max } => {
            buffer.map_channels(|c| linear_stretch(c, *dst_min, *dst_max))
        }
        TransformStep::Shrink { dst_min, dst_max } => {
            buffer.map_channels(|c| shrink(c, *dst_min, *dst_max))
        }
        TransformStep::LinearMap {
            src_min,
            src_max,
            dst_min,
            dst_max,
        } => buffer.map_channels(|c| linear_map(c, *src_min, *src_max, *dst_min, *dst_max)),
        TransformStep::Slide(offset) => buffer.map_channels(|c| Ok(slide(c, *offset))),
        TransformStep::Piecewise(params) => {
            buffer.map_channels(|c| piecewise_linear(c, params))
        }
        TransformStep::PercentileStretch {
            low_pct,
            high_pct,
            out_min,
            out_max,
        } => buffer
            .map_channels(|c| percentile_stretch(c, *low_pct, *high_pct, *out_min, *out_max)),
        TransformStep::Equalize => buffer.map_channels(|c| Ok(equalize(c))),
        TransformStep::MatchHistogram => {
            let reference = reference.ok_or_else(|| {
                ToneError::Pipeline("MatchHistogram requires a reference image".into())
            })?;
            match_buffers(buffer, reference)
        }
        TransformStep::Ace(params) => {
            buffer.map_channels(|c| adaptive_contrast_enhancement(c, params))
        }
        TransformStep::ColorEnhance => enhance_color(buffer),
        TransformStep::IsolateChannel(channel) => isolate_channel(buffer, *channel),
        TransformStep::ReduceResolution(percent) => reduce_resolution(buffer, *percent),
    }
}

fn match_buffers(source: &PixelBuffer, reference: &PixelBuffer) -> Result<PixelBuffer> {
    let planes: Vec<Channel> = source
        .planes()
        .iter()
        .enumerate()
        .map(|(i, plane)| {
            let target = if source.is_rgb() && reference.is_rgb() {
                &reference.planes()[i]
            } else {
                &reference.planes()[0]
            };
            specification_map(plane, target).apply(plane)
        })
        .collect();
    PixelBuffer::from_planes(planes)
}

//! 8-bit RGB <-> HLS conversion.
//!
//! Hue is stored at 256 steps per turn (0 = red, ~85 = green, ~171 = blue);
//! lightness and saturation are scaled to 0..=255. Conversions are done in
//! `f32` and rounded, so an RGB round trip is exact for achromatic pixels and
//! within a few levels otherwise.
//!
//! Hue survives an HLS -> RGB -> HLS round trip within one level for every
//! pixel whose chroma (`max - min` of its RGB samples) is at least
//! [`HUE_STABLE_CHROMA`]. Below that, one RGB level spans several hue steps
//! and the recovered hue can drift further.

use crate::buffer::{Channel, PixelBuffer};
use crate::error::{Result, ToneError};
use crate::filters::clip_to_u8;

/// Hue steps per full turn.
const HUE_STEPS: f32 = 256.0;

/// Smallest RGB chroma at which hue round-trips within one level.
pub const HUE_STABLE_CHROMA: u8 = 26;

/// The three planes of an image in HLS space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HlsPlanes {
    pub hue: Channel,
    pub lightness: Channel,
    pub saturation: Channel,
}

/// Convert one RGB pixel to `(hue, lightness, saturation)`.
pub fn rgb_to_hls(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let (r, g, b) = (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0, clip_to_u8(l * 255.0), 0);
    }

    let d = max - min;
    let s = if l <= 0.5 {
        d / (max + min)
    } else {
        d / (2.0 - max - min)
    };

    let sector = if max == r {
        let h = (g - b) / d;
        if h < 0.0 {
            h + 6.0
        } else {
            h
        }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    let hue = (sector / 6.0 * HUE_STEPS).round() as u32 % HUE_STEPS as u32;
    (hue as u8, clip_to_u8(l * 255.0), clip_to_u8(s * 255.0))
}

/// Convert one HLS pixel back to `(r, g, b)`.
pub fn hls_to_rgb(h: u8, l: u8, s: u8) -> (u8, u8, u8) {
    if s == 0 {
        return (l, l, l);
    }
    let h = h as f32 / HUE_STEPS;
    let l = l as f32 / 255.0;
    let s = s as f32 / 255.0;

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    (
        clip_to_u8(hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0),
        clip_to_u8(hue_to_rgb(p, q, h) * 255.0),
        clip_to_u8(hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0),
    )
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Split an RGB buffer into hue, lightness and saturation planes.
pub fn split_hls(buffer: &PixelBuffer) -> Result<HlsPlanes> {
    let [r, g, b] = rgb_planes(buffer)?;
    let (w, h) = (buffer.width(), buffer.height());
    let n = w * h;

    let mut hue = Vec::with_capacity(n);
    let mut lightness = Vec::with_capacity(n);
    let mut saturation = Vec::with_capacity(n);
    for ((&rv, &gv), &bv) in r.data.iter().zip(g.data.iter()).zip(b.data.iter()) {
        let (hv, lv, sv) = rgb_to_hls(rv, gv, bv);
        hue.push(hv);
        lightness.push(lv);
        saturation.push(sv);
    }

    Ok(HlsPlanes {
        hue: Channel::from_raw(w, h, hue)?,
        lightness: Channel::from_raw(w, h, lightness)?,
        saturation: Channel::from_raw(w, h, saturation)?,
    })
}

/// Merge HLS planes back into an RGB buffer.
pub fn merge_hls(planes: &HlsPlanes) -> Result<PixelBuffer> {
    let (w, h) = (planes.hue.width(), planes.hue.height());
    for plane in [&planes.lightness, &planes.saturation] {
        if plane.data.dim() != planes.hue.data.dim() {
            return Err(ToneError::ChannelSizeMismatch {
                expected: planes.hue.len(),
                actual: plane.len(),
            });
        }
    }

    let n = w * h;
    let mut red = Vec::with_capacity(n);
    let mut green = Vec::with_capacity(n);
    let mut blue = Vec::with_capacity(n);
    let pixels = planes
        .hue
        .data
        .iter()
        .zip(planes.lightness.data.iter())
        .zip(planes.saturation.data.iter());
    for ((&hv, &lv), &sv) in pixels {
        let (rv, gv, bv) = hls_to_rgb(hv, lv, sv);
        red.push(rv);
        green.push(gv);
        blue.push(bv);
    }

    PixelBuffer::rgb(
        Channel::from_raw(w, h, red)?,
        Channel::from_raw(w, h, green)?,
        Channel::from_raw(w, h, blue)?,
    )
}

pub(crate) fn rgb_planes(buffer: &PixelBuffer) -> Result<[&Channel; 3]> {
    match buffer.planes() {
        [r, g, b] => Ok([r, g, b]),
        planes => Err(ToneError::UnsupportedChannelCount(planes.len())),
    }
}

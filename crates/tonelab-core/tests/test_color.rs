mod common;

use tonelab_core::buffer::{Channel, PixelBuffer};
use tonelab_core::color::channels::{isolate_channel, RgbChannel};
use tonelab_core::color::enhance::enhance_color;
use tonelab_core::color::hls::{
    hls_to_rgb, merge_hls, rgb_to_hls, split_hls, HUE_STABLE_CHROMA,
};
use tonelab_core::error::ToneError;

use common::{gradient_channel, noise_rgb, solid_rgb};

fn max_diff(a: (u8, u8, u8), b: (u8, u8, u8)) -> i32 {
    [(a.0, b.0), (a.1, b.1), (a.2, b.2)]
        .iter()
        .map(|&(x, y)| (x as i32 - y as i32).abs())
        .max()
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Pixel conversions
// ---------------------------------------------------------------------------

#[test]
fn test_rgb_to_hls_primaries() {
    assert_eq!(rgb_to_hls(255, 0, 0), (0, 128, 255));
    assert_eq!(rgb_to_hls(0, 255, 0), (85, 128, 255));
    assert_eq!(rgb_to_hls(0, 0, 255), (171, 128, 255));
}

#[test]
fn test_rgb_to_hls_gray_has_no_saturation() {
    for v in [0u8, 1, 77, 128, 254, 255] {
        assert_eq!(rgb_to_hls(v, v, v), (0, v, 0));
    }
}

#[test]
fn test_hls_round_trip_exact_for_gray() {
    for v in 0..=255u8 {
        let (h, l, s) = rgb_to_hls(v, v, v);
        assert_eq!(hls_to_rgb(h, l, s), (v, v, v));
    }
}

#[test]
fn test_hls_round_trip_within_tolerance() {
    for r in (0..=255u8).step_by(15) {
        for g in (0..=255u8).step_by(17) {
            for b in (0..=255u8).step_by(19) {
                let (h, l, s) = rgb_to_hls(r, g, b);
                let back = hls_to_rgb(h, l, s);
                assert!(
                    max_diff((r, g, b), back) <= 6,
                    "({r}, {g}, {b}) -> ({h}, {l}, {s}) -> {back:?}"
                );
            }
        }
    }
}

fn hue_distance(a: u8, b: u8) -> u8 {
    a.wrapping_sub(b).min(b.wrapping_sub(a))
}

#[test]
fn test_hue_round_trip_within_one_level() {
    let mut checked = 0;
    for r in (0..=255u8).step_by(5) {
        for g in (0..=255u8).step_by(5) {
            for b in (0..=255u8).step_by(5) {
                let chroma = r.max(g).max(b) - r.min(g).min(b);
                if chroma < HUE_STABLE_CHROMA {
                    continue;
                }
                let (h, l, s) = rgb_to_hls(r, g, b);
                let (r2, g2, b2) = hls_to_rgb(h, l, s);
                let (h2, _, _) = rgb_to_hls(r2, g2, b2);
                assert!(
                    hue_distance(h, h2) <= 1,
                    "({r}, {g}, {b}): hue {h} came back as {h2}"
                );
                checked += 1;
            }
        }
    }
    assert!(checked > 100_000);
}

#[test]
fn test_hue_round_trip_primaries_exact() {
    for (r, g, b) in [(255, 0, 0), (0, 255, 0), (0, 0, 255), (255, 255, 0)] {
        let (h, l, s) = rgb_to_hls(r, g, b);
        let (h2, _, _) = {
            let (r2, g2, b2) = hls_to_rgb(h, l, s);
            rgb_to_hls(r2, g2, b2)
        };
        assert_eq!(h2, h, "({r}, {g}, {b})");
    }
}

#[test]
fn test_hls_to_rgb_primary_hues() {
    assert!(max_diff(hls_to_rgb(0, 128, 255), (255, 0, 0)) <= 2);
    assert!(max_diff(hls_to_rgb(85, 128, 255), (0, 255, 0)) <= 4);
    assert!(max_diff(hls_to_rgb(171, 128, 255), (0, 0, 255)) <= 4);
}

// ---------------------------------------------------------------------------
// Plane split / merge
// ---------------------------------------------------------------------------

#[test]
fn test_split_hls_requires_rgb() {
    let gray = PixelBuffer::gray(gradient_channel(4, 4));
    assert!(matches!(
        split_hls(&gray),
        Err(ToneError::UnsupportedChannelCount(1))
    ));
}

#[test]
fn test_split_merge_solid_color() {
    let buffer = solid_rgb(5, 3, 200, 40, 90);
    let planes = split_hls(&buffer).unwrap();
    let expected = rgb_to_hls(200, 40, 90);
    assert!(planes.hue.data().iter().all(|&v| v == expected.0));
    assert!(planes.lightness.data().iter().all(|&v| v == expected.1));
    assert!(planes.saturation.data().iter().all(|&v| v == expected.2));

    let merged = merge_hls(&planes).unwrap();
    assert_eq!(merged.width(), 5);
    assert_eq!(merged.height(), 3);
    let back = hls_to_rgb(expected.0, expected.1, expected.2);
    assert_eq!(merged.channel(0).unwrap().data()[[2, 4]], back.0);
    assert_eq!(merged.channel(1).unwrap().data()[[0, 0]], back.1);
    assert_eq!(merged.channel(2).unwrap().data()[[1, 2]], back.2);
}

// ---------------------------------------------------------------------------
// Colour enhancement
// ---------------------------------------------------------------------------

#[test]
fn test_enhance_color_keeps_shape() {
    let buffer = noise_rgb(32, 24);
    let out = enhance_color(&buffer).unwrap();
    assert!(out.is_rgb());
    assert_eq!(out.width(), 32);
    assert_eq!(out.height(), 24);
}

#[test]
fn test_enhance_color_stretches_lightness() {
    // Two dull colours: after enhancement the darker one should reach black
    // lightness and the lighter one full lightness.
    let dark = solid_rgb(4, 4, 90, 80, 70);
    let light = solid_rgb(4, 4, 160, 150, 140);
    let mut planes = Vec::new();
    for c in 0..3 {
        let mut data = dark.channel(c).unwrap().data().clone();
        data.row_mut(3).assign(&light.channel(c).unwrap().data().row(3));
        planes.push(Channel::new(data).unwrap());
    }
    let buffer = PixelBuffer::from_planes(planes).unwrap();

    let out = enhance_color(&buffer).unwrap();
    let lightness = split_hls(&out).unwrap().lightness;
    let (lo, hi) = lightness.min_max();
    assert!(lo <= 2, "darkest lightness {lo}");
    assert!(hi >= 253, "brightest lightness {hi}");
}

#[test]
fn test_enhance_color_rejects_gray() {
    let gray = PixelBuffer::gray(gradient_channel(4, 4));
    assert!(enhance_color(&gray).is_err());
}

// ---------------------------------------------------------------------------
// Channel isolation
// ---------------------------------------------------------------------------

#[test]
fn test_isolate_channel_zeroes_others() {
    let buffer = noise_rgb(8, 8);
    let out = isolate_channel(&buffer, RgbChannel::Green).unwrap();
    assert!(out.channel(0).unwrap().data().iter().all(|&v| v == 0));
    assert_eq!(out.channel(1), buffer.channel(1));
    assert!(out.channel(2).unwrap().data().iter().all(|&v| v == 0));
}

#[test]
fn test_isolate_channel_requires_rgb() {
    let gray = PixelBuffer::gray(gradient_channel(4, 4));
    assert!(isolate_channel(&gray, RgbChannel::Red).is_err());
}

#[test]
fn test_rgb_channel_parse_and_display() {
    assert_eq!("r".parse::<RgbChannel>().unwrap(), RgbChannel::Red);
    assert_eq!("Green".parse::<RgbChannel>().unwrap(), RgbChannel::Green);
    assert_eq!("BLUE".parse::<RgbChannel>().unwrap(), RgbChannel::Blue);
    assert!("alpha".parse::<RgbChannel>().is_err());
    assert_eq!(format!("{}", RgbChannel::Blue), "Blue");
    assert_eq!(RgbChannel::Blue.index(), 2);
}

#![allow(dead_code)]

use ndarray::Array2;

use tonelab_core::buffer::{Channel, PixelBuffer};

/// Channel with a horizontal ramp from `lo` to `hi` (inclusive) across columns.
pub fn ramp_channel(width: usize, height: usize, lo: u8, hi: u8) -> Channel {
    let span = (hi - lo) as usize;
    let data = Array2::from_shape_fn((height, width), |(_, col)| {
        let step = if width > 1 { col * span / (width - 1) } else { 0 };
        lo + step as u8
    });
    Channel::new(data).unwrap()
}

/// Channel whose samples are `row * width + col` wrapped into 0..=255.
pub fn gradient_channel(width: usize, height: usize) -> Channel {
    let data = Array2::from_shape_fn((height, width), |(row, col)| {
        ((row * width + col) % 256) as u8
    });
    Channel::new(data).unwrap()
}

/// Deterministic pseudo-random channel (xorshift), for tests that want
/// texture without depending on a RNG crate.
pub fn noise_channel(width: usize, height: usize, seed: u32) -> Channel {
    let mut state = seed.max(1);
    let samples = (0..width * height)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect();
    Channel::from_raw(width, height, samples).unwrap()
}

pub fn flat_channel(width: usize, height: usize, value: u8) -> Channel {
    Channel::filled(width, height, value).unwrap()
}

/// RGB buffer where every pixel has the same colour.
pub fn solid_rgb(width: usize, height: usize, r: u8, g: u8, b: u8) -> PixelBuffer {
    PixelBuffer::rgb(
        flat_channel(width, height, r),
        flat_channel(width, height, g),
        flat_channel(width, height, b),
    )
    .unwrap()
}

/// RGB buffer built from three differently seeded noise planes.
pub fn noise_rgb(width: usize, height: usize) -> PixelBuffer {
    PixelBuffer::rgb(
        noise_channel(width, height, 11),
        noise_channel(width, height, 23),
        noise_channel(width, height, 37),
    )
    .unwrap()
}

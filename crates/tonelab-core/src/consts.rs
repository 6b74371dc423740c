/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of intensity levels in an 8-bit channel.
pub const LEVELS: usize = 256;

/// Guard for the CDF denominator so an empty histogram does not divide by zero.
/// It is not probability mass: any non-empty channel dwarfs it.
pub const CDF_EPSILON: f64 = 1e-12;

/// Floor applied to ACE local variance before taking the square root.
pub const ACE_VARIANCE_FLOOR: f64 = 1e-6;

/// Default ACE global gain.
pub const DEFAULT_ACE_K1: f64 = 0.5;

/// Default ACE local-mean blend.
pub const DEFAULT_ACE_K2: f64 = 0.5;

/// Default ACE neighbourhood side length.
pub const DEFAULT_ACE_WINDOW: usize = 9;

/// Default lower percentile for percentile stretch.
pub const DEFAULT_LOW_PERCENTILE: f64 = 2.0;

/// Default upper percentile for percentile stretch.
pub const DEFAULT_HIGH_PERCENTILE: f64 = 98.0;

/// Default piecewise threshold and destination ranges.
pub const DEFAULT_PIECEWISE_THRESHOLD: u8 = 128;
pub const DEFAULT_PIECEWISE_LOW: (u8, u8) = (0, 127);
pub const DEFAULT_PIECEWISE_HIGH: (u8, u8) = (128, 255);

/// Number of planes in an RGB buffer.
pub const COLOR_CHANNEL_COUNT: usize = 3;

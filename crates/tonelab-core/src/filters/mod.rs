pub mod equalize;
pub mod levels;
pub mod lut;
pub mod stretch;

use num_traits::ToPrimitive;

use crate::error::{Result, ToneError};

/// Round to the nearest level and clip into [0, 255].
///
/// This is the single place where floating or widened intermediate values are
/// turned back into samples. NaN maps to 0.
pub fn clip_to_u8<T: ToPrimitive>(value: T) -> u8 {
    match value.to_f64() {
        Some(v) if !v.is_nan() => v.round().clamp(0.0, 255.0) as u8,
        _ => 0,
    }
}

/// Reject an inverted `[min, max]` range.
pub(crate) fn validate_range(name: &'static str, min: u8, max: u8) -> Result<()> {
    if max < min {
        return Err(ToneError::invalid(
            name,
            format!("max ({max}) is below min ({min})"),
        ));
    }
    Ok(())
}

/// Reject a percentile outside [0, 100] or a non-finite value.
pub(crate) fn validate_percentile(name: &'static str, pct: f64) -> Result<()> {
    if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
        return Err(ToneError::invalid(
            name,
            format!("percentile {pct} is outside [0, 100]"),
        ));
    }
    Ok(())
}

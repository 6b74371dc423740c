//! Histogram specification (matching).
//!
//! Builds a lookup table that reshapes one channel's intensity distribution to
//! follow another's. Source and target may have different sizes.

use tracing::debug;

use crate::buffer::Channel;
use crate::consts::LEVELS;
use crate::filters::lut::Lut;
use crate::histogram::{compute_cdf, compute_histogram, Cdf};

/// Mapping from `source` levels to `target` levels.
///
/// `mapping[r]` is the smallest `s` with `cdf_target[s] >= cdf_source[r]`, or
/// 255 when no such level exists. The result is non-decreasing.
pub fn specification_map(source: &Channel, target: &Channel) -> Lut {
    let cdf_source = compute_cdf(&compute_histogram(source));
    let cdf_target = compute_cdf(&compute_histogram(target));
    specification_map_from_cdfs(&cdf_source, &cdf_target)
}

/// [`specification_map`] from precomputed CDFs.
///
/// Both CDFs are non-decreasing, so the search position in the target only
/// ever moves forward: a single merge pass over the two tables.
pub fn specification_map_from_cdfs(source: &Cdf, target: &Cdf) -> Lut {
    let tgt = target.values();
    let mut table = [u8::MAX; LEVELS];
    let mut s = 0usize;

    for (r, out) in table.iter_mut().enumerate() {
        let wanted = source.values()[r];
        while s < LEVELS && tgt[s] < wanted {
            s += 1;
        }
        if s == LEVELS {
            break;
        }
        *out = s as u8;
    }

    let lut = Lut::from_table(table);
    debug!(
        first = lut.get(0),
        last = lut.get(u8::MAX),
        "Histogram specification map built"
    );
    lut
}

/// Reshape `source` so its histogram approximates `target`'s.
pub fn match_histogram(source: &Channel, target: &Channel) -> Channel {
    specification_map(source, target).apply(source)
}

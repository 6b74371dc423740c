use rayon::prelude::*;

use crate::buffer::Channel;
use crate::consts::{CDF_EPSILON, LEVELS, PARALLEL_PIXEL_THRESHOLD};

/// Per-level sample counts of an 8-bit channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; LEVELS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            counts: [0; LEVELS],
        }
    }
}

impl Histogram {
    pub fn from_counts(counts: [u64; LEVELS]) -> Self {
        Self { counts }
    }

    pub fn counts(&self) -> &[u64; LEVELS] {
        &self.counts
    }

    pub fn count(&self, level: u8) -> u64 {
        self.counts[level as usize]
    }

    /// Total number of samples counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Lowest level with a non-zero count.
    pub fn min_level(&self) -> Option<u8> {
        self.counts.iter().position(|&c| c > 0).map(|i| i as u8)
    }

    /// Highest level with a non-zero count.
    pub fn max_level(&self) -> Option<u8> {
        self.counts.iter().rposition(|&c| c > 0).map(|i| i as u8)
    }

    /// Mean intensity, or `None` for an empty histogram.
    pub fn mean(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let weighted: f64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(level, &c)| level as f64 * c as f64)
            .sum();
        Some(weighted / total as f64)
    }

    pub fn non_empty_bins(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Probability of each level (all zero for an empty histogram).
    pub fn normalized(&self) -> [f64; LEVELS] {
        let total = (self.total() as f64).max(CDF_EPSILON);
        let mut pdf = [0.0; LEVELS];
        for (p, &c) in pdf.iter_mut().zip(self.counts.iter()) {
            *p = c as f64 / total;
        }
        pdf
    }

    /// Add another histogram's counts into this one.
    pub fn merge(&mut self, other: &Histogram) {
        for (a, b) in self.counts.iter_mut().zip(other.counts.iter()) {
            *a += b;
        }
    }
}

/// Cumulative distribution of intensities, one value per level.
#[derive(Clone, Debug, PartialEq)]
pub struct Cdf {
    values: [f64; LEVELS],
}

impl Cdf {
    pub fn values(&self) -> &[f64; LEVELS] {
        &self.values
    }

    pub fn get(&self, level: u8) -> f64 {
        self.values[level as usize]
    }
}

/// Count occurrences of each of the 256 levels.
///
/// Large channels are counted row-parallel; the partial histograms are summed.
pub fn compute_histogram(channel: &Channel) -> Histogram {
    let (h, w) = channel.data.dim();
    let count_row = |row: usize| {
        let mut hist = Histogram::default();
        for &v in channel.data.row(row) {
            hist.counts[v as usize] += 1;
        }
        hist
    };

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h)
            .into_par_iter()
            .map(count_row)
            .reduce(Histogram::default, |mut acc, part| {
                acc.merge(&part);
                acc
            })
    } else {
        let mut hist = Histogram::default();
        for row in 0..h {
            hist.merge(&count_row(row));
        }
        hist
    }
}

/// Normalise and prefix-sum a histogram.
///
/// The denominator is `max(total, CDF_EPSILON)` so an empty histogram yields an
/// all-zero CDF instead of NaN. For any non-empty histogram the last entry is 1.
pub fn compute_cdf(hist: &Histogram) -> Cdf {
    let total = (hist.total() as f64).max(CDF_EPSILON);
    let mut values = [0.0; LEVELS];
    let mut running = 0u64;
    for (v, &c) in values.iter_mut().zip(hist.counts.iter()) {
        running += c;
        *v = running as f64 / total;
    }
    Cdf { values }
}

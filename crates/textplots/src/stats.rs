//! Descriptive statistics over a raw sample.
//!
//! Percentiles use a single fixed estimator. For a sorted sample
//! `x[0..n]` and `p` in `[0, 100]`:
//!
//! ```text
//! pos = p * (n + 1) / 100
//! pos <  1  -> x[0]
//! pos >= n  -> x[n - 1]
//! otherwise -> x[floor(pos) - 1] + frac(pos) * (x[floor(pos)] - x[floor(pos) - 1])
//! ```

use textplots_core::SampleSummary;
use thiserror::Error;

/// Why a sample cannot be summarised.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StatsError {
    /// No values at all.
    #[error("sample is empty")]
    Empty,
    /// NaN or infinite value.
    #[error("non-finite value {value} at index {index}")]
    NonFinite { index: usize, value: f64 },
}

/// A sorted copy of a sample answering min, max and percentile queries.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    sorted: Vec<f64>,
}

impl DescriptiveStats {
    /// Summarise `values`. Rejects empty samples and non-finite values.
    pub fn new(values: &[f64]) -> Result<Self, StatsError> {
        if values.is_empty() {
            return Err(StatsError::Empty);
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(StatsError::NonFinite { index, value });
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Ok(Self { sorted })
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Always false; empty samples are rejected on construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Smallest value.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    /// Largest value.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.sorted[self.sorted.len() - 1]
    }

    /// Estimate the `p`-th percentile, `p` clamped into `[0, 100]`.
    ///
    /// A NaN `p` has no position in the sample and yields NaN.
    #[must_use]
    pub fn percentile(&self, p: f64) -> f64 {
        if p.is_nan() {
            return f64::NAN;
        }

        let n = self.sorted.len();
        if n == 1 {
            return self.sorted[0];
        }

        let pos = p.clamp(0.0, 100.0) * (n + 1) as f64 / 100.0;
        if pos < 1.0 {
            return self.min();
        }
        if pos >= n as f64 {
            return self.max();
        }

        let fpos = pos.floor();
        let d = pos - fpos;
        let i = fpos as usize;
        let lower = self.sorted[i - 1];
        let upper = self.sorted[i];
        lower + d * (upper - lower)
    }

    /// Median (50th percentile).
    #[must_use]
    pub fn median(&self) -> f64 {
        self.percentile(50.0)
    }

    /// Min, max and the 25th, 50th and 75th percentiles.
    #[must_use]
    pub fn summary(&self) -> SampleSummary {
        SampleSummary::new(
            self.min(),
            self.max(),
            self.percentile(25.0),
            self.percentile(50.0),
            self.percentile(75.0),
        )
    }
}

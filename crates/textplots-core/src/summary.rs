//! Visual range and per-sample summary statistics.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected visual range: a non-finite bound, or the minimum above the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("range [{min}, {max}] needs finite bounds with minimum <= maximum")]
pub struct RangeError {
    /// Requested minimum.
    pub min: f64,
    /// Requested maximum.
    pub max: f64,
}

/// The `[min, max]` window mapped onto a row of cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualRange {
    min: f64,
    max: f64,
}

impl VisualRange {
    /// Create a visual range, rejecting `min > max` and non-finite bounds.
    pub fn new(min: f64, max: f64) -> Result<Self, RangeError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(RangeError { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower edge of the window.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper edge of the window.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether the window has zero width.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Smallest range covering both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Whether `value` lies inside the window (inclusive).
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Five summary statistics of one sample.
///
/// No ordering is enforced between the fields. Estimators can produce
/// non-monotonic values on pathological input and the renderer copes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SampleSummary {
    /// Smallest observed value.
    pub local_min: f64,
    /// Largest observed value.
    pub local_max: f64,
    /// 25th percentile.
    pub quartile_low: f64,
    /// 50th percentile.
    pub median: f64,
    /// 75th percentile.
    pub quartile_high: f64,
}

impl SampleSummary {
    /// Create a summary from its five values.
    #[must_use]
    pub fn new(
        local_min: f64,
        local_max: f64,
        quartile_low: f64,
        median: f64,
        quartile_high: f64,
    ) -> Self {
        Self {
            local_min,
            local_max,
            quartile_low,
            median,
            quartile_high,
        }
    }

    /// Interquartile range.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.quartile_high - self.quartile_low
    }

    /// The sample's own `[local_min, local_max]` span, if well ordered.
    #[must_use]
    pub fn natural_range(&self) -> Option<VisualRange> {
        VisualRange::new(self.local_min, self.local_max).ok()
    }
}

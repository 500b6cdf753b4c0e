//! Error types for textplots.

use textplots_core::RangeError;
use thiserror::Error;

use crate::stats::StatsError;

/// Errors raised while configuring or building a plot.
///
/// Rendering itself never fails; every variant here is a rejected request.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Plot width outside the supported bounds.
    #[error("Width is set to {width} but needs to be in [{min},{max}]")]
    InvalidWidth {
        width: usize,
        min: usize,
        max: usize,
    },

    /// Non-finite limit, or visual minimum above the visual maximum.
    #[error("Invalid plot range: {0}")]
    InvalidRange(#[from] RangeError),

    /// A named sample could not be summarised.
    #[error("Sample '{name}': {source}")]
    Sample {
        name: String,
        #[source]
        source: StatsError,
    },

    /// No samples and no explicit limits to derive a range from.
    #[error("No data: add a sample or set both plot limits")]
    NoData,

    /// Plot configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] serde_yaml_ng::Error),
}

//! Fixed-width text boxplots for terminals and logs.
//!
//! This crate wraps [`textplots_core`] with everything needed to go from raw
//! samples to printable text:
//!
//! - [`DescriptiveStats`]: min, max and percentiles of a raw sample
//! - [`PlotConfig`]: width, explicit limits, glyphs, legend formatting
//! - [`BoxplotBuilder`] / [`Boxplot`]: validation up front, infallible output
//! - [`PlotFormatter`]: name column and min/max legend
//!
//! # Example
//!
//! ```
//! use textplots::Boxplot;
//!
//! let plot = Boxplot::builder([
//!     ("fast", vec![1.0, 2.0, 2.5, 3.0, 4.0]),
//!     ("slow", vec![3.0, 5.0, 6.0, 7.0, 9.0]),
//! ])
//! .width(20)
//! .build()?;
//!
//! print!("{plot}");
//! # Ok::<(), textplots::PlotError>(())
//! ```

mod config;
mod error;
mod format;
mod plot;
mod stats;

pub use config::{PlotConfig, DEFAULT_WIDTH, MAX_WIDTH, MIN_WIDTH};
pub use error::PlotError;
pub use format::{NumberFormat, PlotFormatter};
pub use plot::{Boxplot, BoxplotBuilder};
pub use stats::{DescriptiveStats, StatsError};

// Re-export core types
pub use textplots_core::{
    is_out_of_bounds, locate_bin, render_boxplot, BoxplotRow, Glyph, GlyphSet, RangeError,
    SampleSummary, VisualRange,
};

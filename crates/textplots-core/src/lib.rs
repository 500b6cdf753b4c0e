//! Core rendering for fixed-width text boxplots.
//!
//! This crate turns five summary statistics into a row of character cells:
//! - Data model: [`VisualRange`], [`SampleSummary`]
//! - Bin mapping: [`locate_bin`], [`is_out_of_bounds`]
//! - Glyph alphabet: [`Glyph`], [`GlyphSet`]
//! - Marker and fill placement: [`render_boxplot`] producing a [`BoxplotRow`]
//!
//! The renderer is total: degenerate ranges, inverted quartiles and values
//! outside the visual window never error, they only change which cells are
//! drawn.
//!
//! # Example
//!
//! ```
//! use textplots_core::{render_boxplot, GlyphSet, SampleSummary, VisualRange};
//!
//! let range = VisualRange::new(0.0, 100.0).expect("min <= max");
//! let summary = SampleSummary::new(0.0, 100.0, 25.0, 50.0, 75.0);
//! let row = render_boxplot(range, &summary, 11);
//! assert_eq!(row.to_text(&GlyphSet::ascii()), "|--[#|##]-|");
//! ```

mod binning;
mod glyph;
mod render;
mod summary;

pub use binning::{is_out_of_bounds, locate_bin};
pub use glyph::{Glyph, GlyphSet};
pub use render::{render_boxplot, BoxplotRow};
pub use summary::{RangeError, SampleSummary, VisualRange};

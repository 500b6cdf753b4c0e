//! Plot configuration.
//!
//! All formatting knobs live in one value passed explicitly to the builder.
//! Every field has a default, so a YAML style file only needs to name what it
//! changes:
//!
//! ```yaml
//! width: 40
//! min: 0.0
//! glyphs:
//!   body: "="
//! number_format:
//!   max_fraction_digits: 1
//! ```

use serde::{Deserialize, Serialize};
use textplots_core::{GlyphSet, VisualRange};

use crate::error::PlotError;
use crate::format::NumberFormat;

/// Default row width in cells.
pub const DEFAULT_WIDTH: usize = 80;
/// Narrowest accepted row.
pub const MIN_WIDTH: usize = 1;
/// Widest accepted row.
pub const MAX_WIDTH: usize = 300;

/// Everything that shapes a plot besides the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Row width in cells, within `[MIN_WIDTH, MAX_WIDTH]`.
    pub width: usize,
    /// Explicit lower edge of the visual range; derived from data if unset.
    pub min: Option<f64>,
    /// Explicit upper edge of the visual range; derived from data if unset.
    pub max: Option<f64>,
    /// Characters for each cell kind.
    pub glyphs: GlyphSet,
    /// Separator between name column, row and legend.
    pub column_divisor: char,
    /// Legend number formatting.
    pub number_format: NumberFormat,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            min: None,
            max: None,
            glyphs: GlyphSet::ascii(),
            column_divisor: '|',
            number_format: NumberFormat::default(),
        }
    }
}

impl PlotConfig {
    /// Parse and validate a YAML configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self, PlotError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check width bounds and the explicit limits: each must be finite and,
    /// when both are set, ordered.
    pub fn validate(&self) -> Result<(), PlotError> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&self.width) {
            return Err(PlotError::InvalidWidth {
                width: self.width,
                min: MIN_WIDTH,
                max: MAX_WIDTH,
            });
        }
        match (self.min, self.max) {
            (Some(min), Some(max)) => {
                VisualRange::new(min, max)?;
            }
            (Some(edge), None) | (None, Some(edge)) => {
                VisualRange::new(edge, edge)?;
            }
            (None, None) => {}
        }
        Ok(())
    }

    /// Visual range from the explicit limits, falling back to `natural`.
    pub fn resolve_range(&self, natural: Option<VisualRange>) -> Result<VisualRange, PlotError> {
        let min = self.min.or(natural.map(|r| r.min()));
        let max = self.max.or(natural.map(|r| r.max()));
        match (min, max) {
            (Some(min), Some(max)) => Ok(VisualRange::new(min, max)?),
            _ => Err(PlotError::NoData),
        }
    }
}

//! Cell contents of a boxplot row and the characters that draw them.

use serde::{Deserialize, Serialize};

/// What a single cell of a boxplot row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Glyph {
    /// Nothing drawn.
    #[default]
    Empty,
    /// Sample minimum or maximum.
    MinMax,
    /// 50th percentile.
    Median,
    /// 25th percentile (left box edge).
    QuartileLow,
    /// 75th percentile (right box edge).
    QuartileHigh,
    /// Whisker between an extreme and a box edge.
    Whisker,
    /// Interquartile body between a box edge and the median.
    Body,
}

impl Glyph {
    /// Whether the cell is still unclaimed.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// Whether this glyph is a single-cell marker rather than a fill.
    #[must_use]
    pub fn is_marker(self) -> bool {
        matches!(
            self,
            Self::MinMax | Self::Median | Self::QuartileLow | Self::QuartileHigh
        )
    }
}

/// Characters used to draw each [`Glyph`].
///
/// The default ASCII set draws the median with the same `|` as the sample
/// extremes. Rows read left to right, so the median is the bar between the
/// two box edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphSet {
    /// Unclaimed cell.
    pub empty: char,
    /// Sample minimum and maximum.
    pub min_max: char,
    /// Median.
    pub median: char,
    /// 25th percentile edge.
    pub quartile_low: char,
    /// 75th percentile edge.
    pub quartile_high: char,
    /// Whisker fill.
    pub whisker: char,
    /// Interquartile body fill.
    pub body: char,
}

impl GlyphSet {
    /// Plain ASCII: `| [ ] - #`.
    #[must_use]
    pub const fn ascii() -> Self {
        Self {
            empty: ' ',
            min_max: '|',
            median: '|',
            quartile_low: '[',
            quartile_high: ']',
            whisker: '-',
            body: '#',
        }
    }

    /// Box-drawing characters: `│ [ ] ─ █`.
    #[must_use]
    pub const fn unicode() -> Self {
        Self {
            empty: ' ',
            min_max: '│',
            median: '│',
            quartile_low: '[',
            quartile_high: ']',
            whisker: '─',
            body: '█',
        }
    }

    /// Character for `glyph`.
    #[must_use]
    pub const fn char_for(&self, glyph: Glyph) -> char {
        match glyph {
            Glyph::Empty => self.empty,
            Glyph::MinMax => self.min_max,
            Glyph::Median => self.median,
            Glyph::QuartileLow => self.quartile_low,
            Glyph::QuartileHigh => self.quartile_high,
            Glyph::Whisker => self.whisker,
            Glyph::Body => self.body,
        }
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::ascii()
    }
}

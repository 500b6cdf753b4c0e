//! Text layout around rendered rows: name column, divisors, legend.
//!
//! With a legend, a two-sample plot of width 11 over `[0, 100]` reads:
//!
//! ```text
//! a    |  |-[|]---||
//! bravo||-[#|#]|   |
//!      |0       100|
//! ```

use serde::{Deserialize, Serialize};
use textplots_core::VisualRange;
use unicode_width::UnicodeWidthStr;

use crate::config::PlotConfig;

/// Legend number formatting: up to `max_fraction_digits` decimals with
/// trailing zeros dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    /// Maximum digits after the decimal point.
    pub max_fraction_digits: usize,
}

impl NumberFormat {
    /// Default number of fraction digits.
    pub const DEFAULT_FRACTION_DIGITS: usize = 2;

    /// Create a format with at most `max_fraction_digits` decimals.
    #[must_use]
    pub const fn new(max_fraction_digits: usize) -> Self {
        Self {
            max_fraction_digits,
        }
    }

    /// Format `value`.
    ///
    /// ```
    /// use textplots::NumberFormat;
    ///
    /// let fmt = NumberFormat::default();
    /// assert_eq!(fmt.format(100.0), "100");
    /// assert_eq!(fmt.format(2.5), "2.5");
    /// assert_eq!(fmt.format(1.0 / 3.0), "0.33");
    /// ```
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let mut s = format!("{value:.prec$}", prec = self.max_fraction_digits);
        if s.contains('.') {
            let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
            s.truncate(trimmed);
        }
        if s == "-0" {
            s.remove(0);
        }
        s
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FRACTION_DIGITS)
    }
}

/// Lays out named rows and the min/max legend.
#[derive(Debug, Clone, Copy)]
pub struct PlotFormatter<'a> {
    config: &'a PlotConfig,
}

impl<'a> PlotFormatter<'a> {
    /// Create a formatter for `config`.
    #[must_use]
    pub fn new(config: &'a PlotConfig) -> Self {
        Self { config }
    }

    /// Rows only, one per line.
    #[must_use]
    pub fn plain<S: AsRef<str>>(&self, rows: &[(S, String)]) -> String {
        let mut out = String::new();
        for (_, row) in rows {
            out.push_str(row);
            out.push('\n');
        }
        out
    }

    /// Rows behind an aligned name column, closed by a legend line.
    #[must_use]
    pub fn with_legend<S: AsRef<str>>(&self, rows: &[(S, String)], range: VisualRange) -> String {
        let name_width = rows
            .iter()
            .map(|(name, _)| name.as_ref().width())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for (name, row) in rows {
            let name = name.as_ref();
            out.push_str(name);
            self.pad(&mut out, name_width - name.width());
            out.push(self.config.column_divisor);
            out.push_str(row);
            out.push(self.config.column_divisor);
            out.push('\n');
        }
        out.push_str(&self.legend(name_width, range));
        out.push('\n');
        out
    }

    /// `name_width` blanks, then the min and max labels spread over the row.
    #[must_use]
    pub fn legend(&self, name_width: usize, range: VisualRange) -> String {
        let min = self.config.number_format.format(range.min());
        let max = self.config.number_format.format(range.max());

        let mut line = String::new();
        self.pad(&mut line, name_width);
        line.push(self.config.column_divisor);
        line.push_str(&min);
        self.pad(
            &mut line,
            self.config.width.saturating_sub(min.len() + max.len()),
        );
        line.push_str(&max);
        line.push(self.config.column_divisor);
        line
    }

    fn pad(&self, out: &mut String, count: usize) {
        out.extend(std::iter::repeat(self.config.glyphs.empty).take(count));
    }
}

//! Boxplots of named samples.

use std::fmt;

use textplots_core::{render_boxplot, BoxplotRow, GlyphSet, SampleSummary, VisualRange};

use crate::config::PlotConfig;
use crate::error::PlotError;
use crate::format::{NumberFormat, PlotFormatter};
use crate::stats::DescriptiveStats;

/// A validated set of named samples ready to print.
///
/// Built with [`BoxplotBuilder`]; every configuration error surfaces there,
/// so printing never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Boxplot {
    samples: Vec<(String, SampleSummary)>,
    range: VisualRange,
    config: PlotConfig,
}

impl Boxplot {
    /// Start building a plot from `(name, values)` pairs.
    pub fn builder<I, N, V>(data: I) -> BoxplotBuilder
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: AsRef<[f64]>,
    {
        BoxplotBuilder::new(data)
    }

    /// Resolved visual range shared by all rows.
    #[must_use]
    pub fn range(&self) -> VisualRange {
        self.range
    }

    /// Configuration the plot was built with.
    #[must_use]
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Names and summaries in input order.
    pub fn summaries(&self) -> impl Iterator<Item = (&str, &SampleSummary)> {
        self.samples.iter().map(|(name, s)| (name.as_str(), s))
    }

    /// Rendered rows in input order.
    #[must_use]
    pub fn rows(&self) -> Vec<(&str, BoxplotRow)> {
        self.samples
            .iter()
            .map(|(name, summary)| {
                let row = render_boxplot(self.range, summary, self.config.width);
                tracing::trace!(name = name.as_str(), row = %row, "rendered boxplot row");
                (name.as_str(), row)
            })
            .collect()
    }

    /// `(name, row text)` pairs drawn with the configured glyphs.
    #[must_use]
    pub fn boxplots(&self) -> Vec<(String, String)> {
        self.rows()
            .into_iter()
            .map(|(name, row)| (name.to_string(), row.to_text(&self.config.glyphs)))
            .collect()
    }

    /// The whole plot as text, with or without name column and legend.
    #[must_use]
    pub fn plot(&self, print_legend: bool) -> String {
        let rows = self.boxplots();
        let formatter = PlotFormatter::new(&self.config);
        if print_legend {
            formatter.with_legend(&rows, self.range)
        } else {
            formatter.plain(&rows)
        }
    }
}

impl fmt::Display for Boxplot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plot(true))
    }
}

/// Collects samples and settings, then validates them all at once.
#[derive(Debug, Clone, Default)]
pub struct BoxplotBuilder {
    data: Vec<(String, Vec<f64>)>,
    config: PlotConfig,
}

impl BoxplotBuilder {
    /// Create a builder from `(name, values)` pairs.
    pub fn new<I, N, V>(data: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: AsRef<[f64]>,
    {
        Self {
            data: data
                .into_iter()
                .map(|(name, values)| (name.into(), values.as_ref().to_vec()))
                .collect(),
            config: PlotConfig::default(),
        }
    }

    /// Append one more sample.
    #[must_use]
    pub fn sample(mut self, name: impl Into<String>, values: &[f64]) -> Self {
        self.data.push((name.into(), values.to_vec()));
        self
    }

    /// Row width in cells. Checked in [`build`](Self::build).
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.config.width = width;
        self
    }

    /// Explicit visual limits; `None` derives that edge from the data.
    #[must_use]
    pub fn plot_limits(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.config.min = min;
        self.config.max = max;
        self
    }

    /// Characters for each cell kind.
    #[must_use]
    pub fn glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.config.glyphs = glyphs;
        self
    }

    /// Legend number formatting.
    #[must_use]
    pub fn number_format(mut self, number_format: NumberFormat) -> Self {
        self.config.number_format = number_format;
        self
    }

    /// Replace every setting at once.
    #[must_use]
    pub fn config(mut self, config: PlotConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate settings, summarise every sample and resolve the range.
    pub fn build(self) -> Result<Boxplot, PlotError> {
        self.config.validate()?;

        let mut natural: Option<VisualRange> = None;
        let mut samples = Vec::with_capacity(self.data.len());
        for (name, values) in self.data {
            let stats = match DescriptiveStats::new(&values) {
                Ok(stats) => stats,
                Err(source) => return Err(PlotError::Sample { name, source }),
            };
            let summary = stats.summary();
            let own = VisualRange::new(stats.min(), stats.max())?;
            natural = Some(natural.map_or(own, |r| r.union(&own)));
            samples.push((name, summary));
        }

        let range = self.config.resolve_range(natural)?;
        tracing::debug!(
            samples = samples.len(),
            min = range.min(),
            max = range.max(),
            width = self.config.width,
            "built boxplot"
        );

        Ok(Boxplot {
            samples,
            range,
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatsError;

    fn canonical() -> Vec<f64> {
        // min 0, q1 25, median 50, q3 75, max 100 under the fixed estimator
        vec![0.0, 25.0, 50.0, 75.0, 100.0, 25.0, 75.0]
    }

    #[test]
    fn test_builder_defaults() {
        let plot = Boxplot::builder([("x", [1.0, 2.0, 3.0])]).build().unwrap();
        assert_eq!(plot.config().width, crate::DEFAULT_WIDTH);
        assert_eq!(plot.range().min(), 1.0);
        assert_eq!(plot.range().max(), 3.0);
    }

    #[test]
    fn test_canonical_sample_summary() {
        let plot = Boxplot::builder([("x", canonical())]).build().unwrap();
        let (_, s) = plot.summaries().next().unwrap();
        assert_eq!(*s, SampleSummary::new(0.0, 100.0, 25.0, 50.0, 75.0));
    }

    #[test]
    fn test_boxplots_canonical_row() {
        let plot = Boxplot::builder([("x", canonical())])
            .width(11)
            .build()
            .unwrap();
        assert_eq!(
            plot.boxplots(),
            vec![("x".to_string(), "|--[#|##]-|".to_string())]
        );
    }

    #[test]
    fn test_range_is_union_of_samples() {
        let plot = Boxplot::builder([("a", vec![2.0, 4.0]), ("b", vec![-1.0, 3.0])])
            .build()
            .unwrap();
        assert_eq!(plot.range().min(), -1.0);
        assert_eq!(plot.range().max(), 4.0);
    }

    #[test]
    fn test_plot_limits_override() {
        let plot = Boxplot::builder([("a", vec![2.0, 4.0])])
            .plot_limits(Some(0.0), Some(10.0))
            .build()
            .unwrap();
        assert_eq!(plot.range().min(), 0.0);
        assert_eq!(plot.range().max(), 10.0);
    }

    #[test]
    fn test_invalid_width_rejected() {
        let err = Boxplot::builder([("a", vec![1.0])])
            .width(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, PlotError::InvalidWidth { width: 0, .. }));
    }

    #[test]
    fn test_inverted_limits_rejected() {
        let err = Boxplot::builder([("a", vec![1.0])])
            .plot_limits(Some(5.0), Some(1.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, PlotError::InvalidRange(_)));
    }

    #[test]
    fn test_empty_sample_rejected_with_name() {
        let err = Boxplot::builder([("ok", vec![1.0]), ("empty", vec![])])
            .build()
            .unwrap_err();
        match err {
            PlotError::Sample { name, source } => {
                assert_eq!(name, "empty");
                assert_eq!(source, StatsError::Empty);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_no_samples_without_limits() {
        let data: Vec<(&str, Vec<f64>)> = vec![];
        let err = Boxplot::builder(data).build().unwrap_err();
        assert!(matches!(err, PlotError::NoData));
    }

    #[test]
    fn test_no_samples_with_limits_prints_legend_only() {
        let data: Vec<(&str, Vec<f64>)> = vec![];
        let plot = Boxplot::builder(data)
            .width(8)
            .plot_limits(Some(0.0), Some(1.0))
            .build()
            .unwrap();
        assert_eq!(plot.plot(true), "|0      1|\n");
        assert_eq!(plot.plot(false), "");
    }

    #[test]
    fn test_sample_appends() {
        let plot = BoxplotBuilder::default()
            .sample("first", &[1.0])
            .sample("second", &[2.0])
            .build()
            .unwrap();
        let names: Vec<&str> = plot.summaries().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_plot_without_legend() {
        let plot = Boxplot::builder([("x", canonical())])
            .width(11)
            .build()
            .unwrap();
        assert_eq!(plot.plot(false), "|--[#|##]-|\n");
    }

    #[test]
    fn test_display_includes_legend() {
        let plot = Boxplot::builder([("x", canonical())])
            .width(11)
            .build()
            .unwrap();
        assert_eq!(plot.to_string(), "x||--[#|##]-||\n |0       100|\n");
    }

    #[test]
    fn test_glyphs_and_number_format() {
        let plot = Boxplot::builder([("x", vec![0.5, 1.5, 2.5])])
            .width(7)
            .glyphs(GlyphSet::unicode())
            .number_format(NumberFormat::new(1))
            .build()
            .unwrap();
        let text = plot.plot(true);
        assert!(text.starts_with("x|[██│██]|\n"));
        assert!(text.ends_with("|0.5 2.5|\n"));
    }
}

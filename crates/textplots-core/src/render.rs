//! Marker and fill placement for a single boxplot row.
//!
//! Markers are placed first-writer-wins in a fixed order: quartile edges,
//! median, sample extremes. Fills ignore what is already in a cell and only
//! target the open interval between two markers, so they are applied after
//! the markers that bound them:
//!
//! ```text
//!  1. [ at quartile_low          5. # between [ and |, between | and ]
//!  2. ] at quartile_high         6. | at local_min
//!  3. | at median                7. | at local_max
//!                                8. - between | and [, between ] and |
//! ```
//!
//! Any index outside the visual window is skipped, so statistics beyond an
//! explicit range vanish instead of piling up on the edge cells.

use std::fmt;
use std::ops::Range;

use crate::binning::{is_out_of_bounds, locate_bin};
use crate::glyph::{Glyph, GlyphSet};
use crate::summary::{SampleSummary, VisualRange};

/// An immutable row of exactly `width` glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoxplotRow {
    cells: Box<[Glyph]>,
}

impl BoxplotRow {
    /// Number of cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Cells in index order.
    #[must_use]
    pub fn cells(&self) -> &[Glyph] {
        &self.cells
    }

    /// Glyph at `index`, if within the row.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Glyph> {
        self.cells.get(index).copied()
    }

    /// Number of cells that are not [`Glyph::Empty`].
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|g| !g.is_empty()).count()
    }

    /// Draw the row with the given characters.
    #[must_use]
    pub fn to_text(&self, glyphs: &GlyphSet) -> String {
        self.cells.iter().map(|&g| glyphs.char_for(g)).collect()
    }
}

impl fmt::Display for BoxplotRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(&GlyphSet::ascii()))
    }
}

/// Working grid for one render call.
struct Grid {
    cells: Vec<Glyph>,
    min_bound: isize,
    max_bound: isize,
}

impl Grid {
    fn new(width: usize, min_bound: isize, max_bound: isize) -> Self {
        Self {
            cells: vec![Glyph::Empty; width],
            min_bound,
            max_bound,
        }
    }

    fn visible(&self, index: isize) -> Option<usize> {
        if is_out_of_bounds(index, self.min_bound, self.max_bound) {
            return None;
        }
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.cells.len())
    }

    /// Claim a cell for a marker unless something got there first.
    fn mark(&mut self, index: isize, glyph: Glyph) {
        let Some(i) = self.visible(index) else {
            tracing::trace!(index, ?glyph, "marker outside visual window");
            return;
        };
        if self.cells[i].is_empty() {
            self.cells[i] = glyph;
        }
    }

    /// Overwrite every visible cell strictly between `from` and `to`.
    fn fill_between(&mut self, from: isize, to: isize, glyph: Glyph) {
        for index in open_interval(from, to) {
            if let Some(i) = self.visible(index) {
                self.cells[i] = glyph;
            }
        }
    }

    fn finish(self) -> BoxplotRow {
        BoxplotRow {
            cells: self.cells.into_boxed_slice(),
        }
    }
}

/// `(from, to)` exclusive on both ends; empty when `to <= from + 1`.
fn open_interval(from: isize, to: isize) -> Range<isize> {
    from.saturating_add(1)..to
}

/// Render one sample's summary as a row of `width` glyphs.
///
/// Total for every input: inverted quartiles, a zero-width range and values
/// outside `range` all produce a row of exactly `width` cells.
///
/// # Examples
///
/// ```
/// use textplots_core::{render_boxplot, SampleSummary, VisualRange};
///
/// let range = VisualRange::new(0.0, 100.0).unwrap();
/// let flat = SampleSummary::new(50.0, 50.0, 50.0, 50.0, 50.0);
/// assert_eq!(render_boxplot(range, &flat, 11).to_string(), "     [     ");
/// ```
#[must_use]
pub fn render_boxplot(range: VisualRange, summary: &SampleSummary, width: usize) -> BoxplotRow {
    let (min, max) = (range.min(), range.max());
    let bin = |value: f64| locate_bin(value, width, min, max);

    let min_bound = bin(min);
    let max_bound = bin(max);
    let quartile_low = bin(summary.quartile_low);
    let quartile_high = bin(summary.quartile_high);
    let median = bin(summary.median);
    let local_min = bin(summary.local_min);
    let local_max = bin(summary.local_max);

    let mut grid = Grid::new(width, min_bound, max_bound);

    grid.mark(quartile_low, Glyph::QuartileLow);
    grid.mark(quartile_high, Glyph::QuartileHigh);
    grid.mark(median, Glyph::Median);

    grid.fill_between(quartile_low, median, Glyph::Body);
    grid.fill_between(median, quartile_high, Glyph::Body);

    grid.mark(local_min, Glyph::MinMax);
    grid.mark(local_max, Glyph::MinMax);

    grid.fill_between(local_min, quartile_low, Glyph::Whisker);
    grid.fill_between(quartile_high, local_max, Glyph::Whisker);

    grid.finish()
}

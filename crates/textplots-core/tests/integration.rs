//! Integration tests for textplots-core.
//!
//! These tests drive the public API end-to-end: range, summary, render, text.

use textplots_core::{
    is_out_of_bounds, locate_bin, render_boxplot, Glyph, GlyphSet, SampleSummary, VisualRange,
};

fn range(min: f64, max: f64) -> VisualRange {
    VisualRange::new(min, max).expect("valid range")
}

// =============================================================================
// Bin Mapping
// =============================================================================

#[test]
fn test_range_edges_map_to_row_edges() {
    for width in [1, 2, 11, 80, 300] {
        assert_eq!(locate_bin(-3.5, width, -3.5, 12.25), 0);
        assert_eq!(locate_bin(12.25, width, -3.5, 12.25), width as isize - 1);
    }
}

#[test]
fn test_every_bin_is_reachable() {
    let width = 21;
    let bins: Vec<isize> = (0..=200_i32)
        .map(|i| locate_bin(f64::from(i) / 2.0, width, 0.0, 100.0))
        .collect();
    for expected in 0..width as isize {
        assert!(bins.contains(&expected), "bin {expected} never hit");
    }
}

#[test]
fn test_window_bounds_reject_sentinels() {
    let lo = locate_bin(0.0, 11, 0.0, 1.0);
    let hi = locate_bin(1.0, 11, 0.0, 1.0);
    assert!(is_out_of_bounds(locate_bin(-1.0, 11, 0.0, 1.0), lo, hi));
    assert!(is_out_of_bounds(locate_bin(2.0, 11, 0.0, 1.0), lo, hi));
    assert!(!is_out_of_bounds(locate_bin(0.5, 11, 0.0, 1.0), lo, hi));
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_canonical_boxplot() {
    let summary = SampleSummary::new(0.0, 100.0, 25.0, 50.0, 75.0);
    let row = render_boxplot(range(0.0, 100.0), &summary, 11);
    assert_eq!(row.to_text(&GlyphSet::ascii()), "|--[#|##]-|");
    assert_eq!(
        row.cells(),
        &[
            Glyph::MinMax,
            Glyph::Whisker,
            Glyph::Whisker,
            Glyph::QuartileLow,
            Glyph::Body,
            Glyph::Median,
            Glyph::Body,
            Glyph::Body,
            Glyph::QuartileHigh,
            Glyph::Whisker,
            Glyph::MinMax,
        ]
    );
}

#[test]
fn test_wide_row_keeps_shape() {
    let summary = SampleSummary::new(0.0, 100.0, 25.0, 50.0, 75.0);
    let row = render_boxplot(range(0.0, 100.0), &summary, 21);
    // bins: 0, 5, 10, 15, 20
    assert_eq!(row.to_string(), "|----[####|####]----|");
}

#[test]
fn test_shifted_sample_in_shared_range() {
    // Second sample of a two-sample plot spanning [0, 20].
    let summary = SampleSummary::new(10.0, 20.0, 12.0, 15.0, 18.0);
    let row = render_boxplot(range(0.0, 20.0), &summary, 21);
    assert_eq!(row.to_string(), "          |-[##|##]-|");
}

#[test]
fn test_narrow_window_hides_everything_outside() {
    let summary = SampleSummary::new(0.0, 100.0, 10.0, 20.0, 90.0);
    let row = render_boxplot(range(30.0, 70.0), &summary, 9);
    // Only the body between median (hidden, left) and q3 (hidden, right).
    assert_eq!(row.to_string(), "#########");
    assert!(row.cells().iter().all(|g| !g.is_marker()));
}

#[test]
fn test_custom_glyph_set() {
    let glyphs = GlyphSet {
        median: 'M',
        ..GlyphSet::ascii()
    };
    let summary = SampleSummary::new(0.0, 100.0, 25.0, 50.0, 75.0);
    let row = render_boxplot(range(0.0, 100.0), &summary, 11);
    assert_eq!(row.to_text(&glyphs), "|--[#M##]-|");
}

#[test]
fn test_rows_render_independently_across_threads() {
    let summaries: Vec<SampleSummary> = (0..8_i32)
        .map(|i| {
            let base = f64::from(i) * 10.0;
            SampleSummary::new(base, base + 20.0, base + 5.0, base + 10.0, base + 15.0)
        })
        .collect();
    let window = range(0.0, 100.0);

    let serial: Vec<String> = summaries
        .iter()
        .map(|s| render_boxplot(window, s, 40).to_string())
        .collect();

    let parallel: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = summaries
            .iter()
            .map(|s| scope.spawn(move || render_boxplot(window, s, 40).to_string()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("render thread"))
            .collect()
    });

    assert_eq!(serial, parallel);
}

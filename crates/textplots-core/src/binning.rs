//! Mapping continuous values onto discrete character cells.
//!
//! Bin indices are signed so that values outside the visual window have a
//! representation of their own: `-1` below the window and `width` above it.
//! Both sentinels fail [`is_out_of_bounds`] for any in-window bound pair.

/// Locate the bin for `value` on a row of `width` cells spanning `[min, max]`.
///
/// In-range values are rescaled to `[0, width - 1]` and rounded half up:
/// `floor((value - min) / (max - min) * (width - 1) + 0.5)`.
///
/// When `min == max` every value, NaN included, lands in bin 0. Otherwise
/// values below `min` (and NaN) map to `-1`, values above `max` map to
/// `width`.
///
/// # Examples
///
/// ```
/// use textplots_core::locate_bin;
///
/// assert_eq!(locate_bin(0.0, 11, 0.0, 100.0), 0);
/// assert_eq!(locate_bin(25.0, 11, 0.0, 100.0), 3);
/// assert_eq!(locate_bin(100.0, 11, 0.0, 100.0), 10);
/// assert_eq!(locate_bin(-1.0, 11, 0.0, 100.0), -1);
/// assert_eq!(locate_bin(101.0, 11, 0.0, 100.0), 11);
/// ```
#[must_use]
pub fn locate_bin(value: f64, width: usize, min: f64, max: f64) -> isize {
    if min == max {
        return 0;
    }

    let last = width.saturating_sub(1) as isize;

    if value.is_nan() || value < min {
        return -1;
    }
    if value > max {
        return last + 1;
    }

    let scaled = (value - min) / (max - min) * last as f64 + 0.5;
    (scaled.floor() as isize).clamp(0, last)
}

/// Whether `index` lies outside the visible window `[min_bound, max_bound]`.
#[must_use]
pub fn is_out_of_bounds(index: isize, min_bound: isize, max_bound: isize) -> bool {
    index < min_bound || index > max_bound
}

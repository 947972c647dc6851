//! Adjustment ratios, and the window of ratios a breakpoint must fall into
//! to be considered feasible.

use crate::config::Settings;

/// Computes the adjusment ratio of a line of words, based on its ideal
/// width, its actual width, and the shrinkability and stretchability of each
/// of the spaces between its words. This essentially tells how much effort
/// has to be produced to fit the line to the desired width: positive ratios
/// stretch the spaces, negative ratios shrink them.
///
/// A line that cannot be adjusted at all, because it holds a single word or
/// because its spaces have no elasticity, gets an infinite ratio and is
/// never feasible, even when it happens to fit exactly. The sign of the
/// infinity tells whether the line was too long.
pub fn adjustment_ratio(
    ideal_width: f64,
    actual_width: f64,
    word_count: usize,
    shrink: f64,
    stretch: f64,
) -> f64 {
    let gap = ideal_width - actual_width;
    let spaces = word_count.saturating_sub(1) as f64;

    let elasticity = if actual_width < ideal_width {
        spaces * stretch
    } else {
        spaces * shrink
    };

    if elasticity == 0.0 {
        if gap < 0.0 {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    } else {
        gap / elasticity
    }
}

/// Checks whether a ratio is lower than or equal to the maximal adjustment
/// ratio, widened by `looseness`.
pub fn ratio_within_max(settings: &Settings, ratio: f64, looseness: f64) -> bool {
    ratio <= settings.max_ratio + looseness
}

/// Checks whether a ratio is greater than or equal to the minimal
/// adjustment ratio.
pub fn ratio_within_min(settings: &Settings, ratio: f64) -> bool {
    ratio >= settings.min_ratio
}

/// Checks whether a breakpoint with this adjustment ratio can be used.
///
/// The `looseness` is added to the maximal ratio, which allows a search to
/// retry with relaxed constraints.
pub fn is_valid_ratio(settings: &Settings, ratio: f64, looseness: f64) -> bool {
    ratio_within_max(settings, ratio, looseness) && ratio_within_min(settings, ratio)
}

//! Badness and demerits of a line.

use crate::config::Settings;
use crate::linebreak::constants::{BADNESS_FLOOR, BADNESS_SCALE};

/// Computes the badness of a line from its adjustment ratio.
///
/// Lines that must shrink more than allowed, or whose ratio is undefined,
/// are infinitely bad. Every other line has a badness of at least one half,
/// growing with the cube of the ratio.
pub fn badness(settings: &Settings, adjustment_ratio: f64) -> f64 {
    if adjustment_ratio.is_nan() || adjustment_ratio < settings.min_ratio {
        return f64::INFINITY;
    }

    BADNESS_SCALE * adjustment_ratio.abs().powi(3) + BADNESS_FLOOR
}

/// Computes the demerits of a line based on its badness and the penalty of
/// the breakpoint that ends it.
///
/// A penalty of minus infinity encodes a forced break and does not
/// contribute. Any other negative penalty rewards the breakpoint and may
/// yield negative demerits.
pub fn demerits_from_badness(settings: &Settings, badness: f64, penalty: f64, flag: bool) -> f64 {
    let flag_penalty = if flag { settings.flag_penalty } else { 0.0 };

    if penalty >= 0.0 {
        (settings.demerit_offset + badness + penalty).powi(2) + flag_penalty
    } else if penalty == f64::NEG_INFINITY {
        (settings.demerit_offset + badness).powi(2) + flag_penalty
    } else {
        (settings.demerit_offset + badness).powi(2) - penalty.powi(2) + flag_penalty
    }
}

/// Computes the demerits of a line ending at a breakpoint with a given
/// penalty, adding the hyphen penalty of the current alignment when the
/// line ends with a hyphen, and the fitness class demerit when the line
/// skips a fitness class.
pub fn demerits_with_penalty(
    settings: &Settings,
    adjustment_ratio: f64,
    penalty: f64,
    flag: bool,
    has_hyphen: bool,
    skipping_fitness_class: bool,
) -> f64 {
    let badness = badness(settings, adjustment_ratio);

    let mut additional_penalty = penalty;
    if has_hyphen {
        additional_penalty += settings.hyphen_penalty_for_alignment();
    }

    let mut demerits = demerits_from_badness(settings, badness, additional_penalty, flag);
    if skipping_fitness_class {
        demerits += settings.fitness_class_demerit;
    }

    demerits
}

/// Computes the demerits of a line from its adjustment ratio.
///
/// This is the entry point of a breakpoint search. The other functions of
/// this module give access to the intermediate values.
pub fn demerits(
    settings: &Settings,
    adjustment_ratio: f64,
    flag: bool,
    has_hyphen: bool,
    skipping_fitness_class: bool,
) -> f64 {
    demerits_with_penalty(
        settings,
        adjustment_ratio,
        0.0,
        flag,
        has_hyphen,
        skipping_fitness_class,
    )
}

#[cfg(test)]
mod tests {

    use test_case::test_case;

    use crate::config::{Alignment, Settings};
    use crate::linebreak::demerits::{badness, demerits, demerits_from_badness, demerits_with_penalty};

    #[test_case(-1.5 ; "too tight")]
    #[test_case(-1.0000001 ; "barely too tight")]
    #[test_case(f64::NEG_INFINITY ; "infinitely tight")]
    #[test_case(f64::NAN ; "undefined")]
    fn test_infinite_badness(ratio: f64) {
        assert_eq!(badness(&Settings::default(), ratio), f64::INFINITY);
    }

    #[test]
    fn test_badness_values() {
        let settings = Settings::default();
        assert_eq!(badness(&settings, 0.0), 0.5);
        assert_eq!(badness(&settings, 1.0), 100.5);
        assert_eq!(badness(&settings, -1.0), 100.5);
        assert_eq!(badness(&settings, 2.0), 800.5);
        assert_eq!(badness(&settings, 0.5), 13.0);
    }

    #[test]
    fn test_loose_lines_keep_finite_badness() {
        let settings = Settings::default();
        assert_eq!(badness(&settings, 3.0), 2700.5);
        assert_eq!(badness(&settings, f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_positive_penalty() {
        let settings = Settings::default();
        assert_eq!(demerits_from_badness(&settings, 10.0, 5.0, false), 256.0);
        assert_eq!(demerits_from_badness(&settings, 10.0, 0.0, false), 121.0);
        assert_eq!(demerits_from_badness(&settings, 10.0, 5.0, true), 3256.0);
    }

    #[test]
    fn test_forced_break() {
        let settings = Settings::default();
        assert_eq!(
            demerits_from_badness(&settings, 10.0, f64::NEG_INFINITY, false),
            (settings.demerit_offset + 10.0).powi(2)
        );
    }

    #[test]
    fn test_favored_break() {
        let settings = Settings::default();
        assert_eq!(
            demerits_from_badness(&settings, 10.0, -5.0, true),
            (settings.demerit_offset + 10.0).powi(2) - 25.0 + settings.flag_penalty
        );
    }

    #[test]
    fn test_negative_demerits() {
        let settings = Settings::default();
        assert_eq!(demerits_from_badness(&settings, 0.5, -100.0, false), -9997.75);
    }

    #[test]
    fn test_forbidden_break() {
        let settings = Settings::default();
        assert_eq!(
            demerits_from_badness(&settings, 10.0, f64::INFINITY, false),
            f64::INFINITY
        );
    }

    #[test]
    fn test_demerits_without_extras() {
        let settings = Settings::default();
        // (1 + 100.5)^2
        assert_eq!(demerits(&settings, 1.0, false, false, false), 10302.25);
    }

    #[test]
    fn test_hyphen_penalty_depends_on_alignment() {
        let justified = Settings::default();
        // (1 + 0.5 + 50)^2
        assert_eq!(demerits(&justified, 0.0, false, true, false), 2652.25);

        let ragged = Settings::with_alignment(Alignment::Left);
        // (1 + 0.5 + 500)^2
        assert_eq!(demerits(&ragged, 0.0, false, true, false), 251502.25);
    }

    #[test]
    fn test_all_extras() {
        let settings = Settings::default();
        // (1 + 0.5 + 50)^2 + 3000 + 3000
        assert_eq!(demerits(&settings, 0.0, true, true, true), 8652.25);
    }

    #[test]
    fn test_infeasible_line_has_infinite_demerits() {
        let settings = Settings::default();
        assert_eq!(demerits(&settings, -2.0, false, false, false), f64::INFINITY);
    }

    #[test]
    fn test_penalty_is_combined_with_hyphen() {
        let settings = Settings::default();
        // (1 + 0.5 + 50 + 50)^2
        assert_eq!(
            demerits_with_penalty(&settings, 0.0, 50.0, false, true, false),
            10302.25
        );
        assert_eq!(
            demerits_with_penalty(&settings, 0.0, f64::NEG_INFINITY, false, true, false),
            2.25
        );
    }
}

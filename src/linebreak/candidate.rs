//! Measurements of a candidate breakpoint, and the scores derived from them.

use crate::config::Settings;
use crate::linebreak::demerits::{badness, demerits_with_penalty};
use crate::linebreak::fitness::{fitness_class, fitness_tier};
use crate::linebreak::ratio::{adjustment_ratio, is_valid_ratio};
use crate::timings::Timings;

/// The geometry of the line that would end at a candidate breakpoint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate {
    /// The width the line should have.
    pub ideal_width: f64,

    /// The width of the line with natural spacing.
    pub actual_width: f64,

    /// The number of words on the line.
    pub word_count: usize,

    /// How much each space of the line can shrink.
    pub shrink: f64,

    /// How much each space of the line can stretch.
    pub stretch: f64,

    /// The penalty of the breakpoint. Minus infinity forces the break, plus
    /// infinity forbids it.
    pub penalty: f64,

    /// Whether the breakpoint is flagged.
    pub flag: bool,

    /// Whether the line ends with a hyphen.
    pub has_hyphen: bool,

    /// Whether the line is more than one fitness class away from the
    /// previous one.
    pub skipping_fitness_class: bool,
}

impl Candidate {
    /// Creates a candidate with no penalty and no flag.
    pub fn new(
        ideal_width: f64,
        actual_width: f64,
        word_count: usize,
        shrink: f64,
        stretch: f64,
    ) -> Candidate {
        Candidate {
            ideal_width,
            actual_width,
            word_count,
            shrink,
            stretch,
            penalty: 0.0,
            flag: false,
            has_hyphen: false,
            skipping_fitness_class: false,
        }
    }

    /// Sets the penalty of the breakpoint.
    pub fn with_penalty(mut self, penalty: f64) -> Candidate {
        self.penalty = penalty;
        self
    }

    /// Sets whether the breakpoint is flagged.
    pub fn flagged(mut self, flag: bool) -> Candidate {
        self.flag = flag;
        self
    }

    /// Sets whether the line ends with a hyphen.
    pub fn hyphenated(mut self, has_hyphen: bool) -> Candidate {
        self.has_hyphen = has_hyphen;
        self
    }

    /// Sets whether the line skips a fitness class.
    pub fn skipping(mut self, skipping: bool) -> Candidate {
        self.skipping_fitness_class = skipping;
        self
    }

    /// Returns the adjustment ratio of the line.
    pub fn adjustment_ratio(&self) -> f64 {
        adjustment_ratio(
            self.ideal_width,
            self.actual_width,
            self.word_count,
            self.shrink,
            self.stretch,
        )
    }

    /// Scores the candidate.
    pub fn score(&self, settings: &Settings, looseness: f64) -> Score {
        let ratio = self.adjustment_ratio();

        Score {
            ratio,
            badness: badness(settings, ratio),
            demerits: demerits_with_penalty(
                settings,
                ratio,
                self.penalty,
                self.flag,
                self.has_hyphen,
                self.skipping_fitness_class,
            ),
            fitness_class: fitness_class(settings, ratio),
            fitness_tier: fitness_tier(settings, ratio),
            feasible: is_valid_ratio(settings, ratio, looseness) && self.penalty < f64::INFINITY,
        }
    }

    /// Scores the candidate while recording the time it takes.
    pub fn score_timed(&self, settings: &Settings, looseness: f64, timings: &mut Timings) -> Score {
        timings.start("score");
        let score = self.score(settings, looseness);
        timings.end("score");
        score
    }
}

/// Everything a search needs to know about a candidate breakpoint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Score {
    /// The adjustment ratio of the line.
    pub ratio: f64,

    /// The badness of the line.
    pub badness: f64,

    /// The demerits of the line, which can be negative.
    pub demerits: f64,

    /// The upper bound of the fitness class of the line.
    pub fitness_class: f64,

    /// The index of the fitness class of the line.
    pub fitness_tier: usize,

    /// Whether the breakpoint can be used at all.
    pub feasible: bool,
}

//! Mathematical logic for scoring the places where a paragraph can be broken
//! into lines.
//!
//! An optimal line breaking search walks the candidate breakpoints of a
//! paragraph and keeps the set of breakpoints with the least total demerits.
//! This module provides what it needs to do so: adjustment ratios, badness,
//! demerits, fitness classes, and the feasibility of a breakpoint. Every
//! function here is pure, takes the settings by shared reference, and can be
//! called from any number of threads at once.
//!
//! Infeasibility is never an error: it shows up as an infinite badness, or
//! as a ratio rejected by `is_valid_ratio`.

pub mod candidate;
pub mod constants;
pub mod demerits;
pub mod fitness;
pub mod ratio;

pub use crate::linebreak::candidate::{Candidate, Score};
pub use crate::linebreak::demerits::{badness, demerits, demerits_from_badness, demerits_with_penalty};
pub use crate::linebreak::fitness::{fitness_class, fitness_tier, skips_fitness_class};
pub use crate::linebreak::ratio::{adjustment_ratio, is_valid_ratio, ratio_within_max, ratio_within_min};

//! Fitness classes bucket lines by how tight or loose they are, so that a
//! search can penalize abrupt changes of rhythm between adjacent lines.

use crate::config::Settings;

/// Computes the index of the fitness class of a line based on its
/// adjustment ratio.
///
/// This is the index of the first upper bound strictly greater than the
/// ratio. Ratios that exceed every bound, infinite ratios included, fall
/// into the last class.
pub fn fitness_tier(settings: &Settings, adjustment_ratio: f64) -> usize {
    settings
        .fitness_classes
        .iter()
        .position(|class| adjustment_ratio < *class)
        .unwrap_or_else(|| settings.fitness_classes.len().saturating_sub(1))
}

/// Computes the fitness class of a line based on its adjustment ratio.
///
/// The class is identified by its upper bound.
pub fn fitness_class(settings: &Settings, adjustment_ratio: f64) -> f64 {
    settings
        .fitness_classes
        .get(fitness_tier(settings, adjustment_ratio))
        .copied()
        // Only reachable with unvalidated settings.
        .unwrap_or(f64::INFINITY)
}

/// Checks whether two adjacent lines are more than one fitness class apart.
pub fn skips_fitness_class(previous_tier: usize, tier: usize) -> bool {
    (tier as i64 - previous_tier as i64).abs() > 1
}

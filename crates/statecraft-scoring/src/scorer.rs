//! Aggregate effectiveness scoring.
//!
//! `raw = mean(baseline) + Σ bonus`, clamped to the score bounds. The mean
//! and the bonuses are reported separately so a caller can rebuild the final
//! number from the printed contribution list.

use statecraft_config::ScoringConfig;
use statecraft_core::{ComponentDefinition, Contribution};

/// The parts an aggregate score is assembled from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateScore {
    /// Mean baseline effectiveness; 0 for an empty selection.
    pub mean_baseline: f64,
    /// Sum of contribution bonuses, in percentage points.
    pub total_bonus: f64,
    /// `mean_baseline + total_bonus`, before clamping.
    pub raw: f64,
    /// `raw` clamped to the configured bounds.
    pub clamped: f64,
}

/// Scores a selection with the default `[0, 100]` bounds.
///
/// # Example
///
/// ```
/// use statecraft_scoring::scorer::score;
///
/// assert_eq!(score(&[], &[]), 0.0);
/// ```
pub fn score(components: &[&ComponentDefinition], contributions: &[Contribution]) -> f64 {
    let defaults = ScoringConfig::default();
    score_with(components, contributions, &defaults).clamped
}

/// Scores a selection with the bounds from `scoring`.
pub fn score_with(
    components: &[&ComponentDefinition],
    contributions: &[Contribution],
    scoring: &ScoringConfig,
) -> AggregateScore {
    let mean_baseline = mean_baseline(components);
    let total_bonus: f64 = contributions.iter().map(|c| c.bonus_percent).sum();
    let raw = mean_baseline + total_bonus;

    AggregateScore {
        mean_baseline,
        total_bonus,
        raw,
        clamped: raw.max(scoring.score_floor).min(scoring.score_ceiling),
    }
}

fn mean_baseline(components: &[&ComponentDefinition]) -> f64 {
    if components.is_empty() {
        return 0.0;
    }
    let sum: f64 = components.iter().map(|d| d.baseline_effectiveness).sum();
    sum / components.len() as f64
}

#[cfg(test)]
#[path = "scorer_tests.rs"]
mod tests;

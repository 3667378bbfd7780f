//! Pairwise synergy enumeration.

use statecraft_core::Contribution;
use tracing::trace;

use crate::index::RelationshipIndex;
use crate::validator::ValidatedConfiguration;

/// Output of the synergy evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct SynergyEvaluation {
    /// Non-neutral pairs in explanation order.
    pub contributions: Vec<Contribution>,
    /// Number of unordered pairs examined; always `k * (k - 1) / 2`.
    pub pairs_considered: usize,
}

impl SynergyEvaluation {
    /// Sum of all bonus percentages.
    pub fn total_bonus(&self) -> f64 {
        self.contributions.iter().map(|c| c.bonus_percent).sum()
    }
}

/// Resolves every unordered pair of active components against the index.
///
/// Quadratic in the number of active components. Every pair is visited;
/// neutral pairs are counted but not listed. Contributions are sorted by
/// descending absolute bonus, ties broken by canonical pair, so identical
/// input always yields identical output.
pub fn evaluate(
    configuration: &ValidatedConfiguration<'_>,
    index: &RelationshipIndex,
) -> SynergyEvaluation {
    let components = configuration.components();
    let mut contributions = Vec::new();
    let mut pairs_considered = 0;

    for (i, a) in components.iter().enumerate() {
        for b in &components[i + 1..] {
            pairs_considered += 1;
            let Some(entry) = index.lookup(&a.component_type, &b.component_type) else {
                continue;
            };
            trace!(
                event = "pair_resolved",
                pair = %entry.pair,
                kind = %entry.kind,
                bonus = entry.bonus_percent,
            );
            contributions.push(Contribution::from(entry));
        }
    }

    contributions.sort_by(Contribution::explanation_order);

    SynergyEvaluation {
        contributions,
        pairs_considered,
    }
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;

//! The engine's output value.

use std::collections::BTreeSet;

use statecraft_core::{ComponentType, Contribution, ValidationWarning};

use crate::analysis::ComponentAnalysis;
use crate::projector::ImpactProjection;

/// Complete, immutable outcome of one evaluation.
///
/// `aggregate_effectiveness` is always
/// `clamp(mean_baseline + Σ contributions.bonus_percent)`, so the number can
/// be reproduced from the explanation alone.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationResult {
    /// Version label of the catalog the result was computed against.
    pub catalog_version: String,
    /// Distinct active types, sorted.
    pub active_components: Vec<ComponentType>,
    /// Clamped score.
    pub aggregate_effectiveness: f64,
    /// Score before clamping.
    pub raw_effectiveness: f64,
    pub mean_baseline: f64,
    pub total_implementation_cost: f64,
    pub total_maintenance_cost: f64,
    pub total_capacity_used: u64,
    pub capacity_budget: Option<u64>,
    /// Unordered pairs examined by the synergy evaluator.
    pub pairs_considered: usize,
    /// Non-neutral pairs, larger absolute bonus first.
    pub contributions: Vec<Contribution>,
    /// Per-component breakdown, worst first.
    pub component_analyses: Vec<ComponentAnalysis>,
    pub impact_projection: ImpactProjection,
    pub validation_warnings: Vec<ValidationWarning>,
}

impl EvaluationResult {
    /// Sum of contribution bonuses.
    pub fn total_bonus(&self) -> f64 {
        self.contributions.iter().map(|c| c.bonus_percent).sum()
    }

    /// Contributions from synergy pairs.
    pub fn synergies(&self) -> impl Iterator<Item = &Contribution> {
        self.contributions.iter().filter(|c| c.kind.is_synergy())
    }

    /// Contributions from conflicting pairs.
    pub fn conflicts(&self) -> impl Iterator<Item = &Contribution> {
        self.contributions.iter().filter(|c| !c.kind.is_synergy())
    }

    /// Returns true if the raw score fell outside the bounds.
    pub fn was_clamped(&self) -> bool {
        self.raw_effectiveness != self.aggregate_effectiveness
    }

    pub fn has_warnings(&self) -> bool {
        !self.validation_warnings.is_empty()
    }

    /// Returns true if the capacity budget was exceeded.
    pub fn is_over_budget(&self) -> bool {
        self.validation_warnings
            .iter()
            .any(|w| matches!(w, ValidationWarning::CapacityExceeded { .. }))
    }

    /// Breakdown for one active component.
    pub fn analysis_for(&self, component: &ComponentType) -> Option<&ComponentAnalysis> {
        self.component_analyses
            .iter()
            .find(|a| &a.component_type == component)
    }

    /// Describes how `other` differs from `self`.
    ///
    /// Deltas are `other - self`; `gained` holds contributions present only
    /// in `other`, `lost` those present only in `self`.
    pub fn compare(&self, other: &EvaluationResult) -> ResultDiff {
        let before: BTreeSet<&ComponentType> = self.active_components.iter().collect();
        let after: BTreeSet<&ComponentType> = other.active_components.iter().collect();

        let gained = other
            .contributions
            .iter()
            .filter(|c| !self.contributions.contains(c))
            .cloned()
            .collect();
        let lost = self
            .contributions
            .iter()
            .filter(|c| !other.contributions.contains(c))
            .cloned()
            .collect();

        ResultDiff {
            effectiveness_delta: other.aggregate_effectiveness - self.aggregate_effectiveness,
            implementation_cost_delta: other.total_implementation_cost
                - self.total_implementation_cost,
            maintenance_cost_delta: other.total_maintenance_cost - self.total_maintenance_cost,
            capacity_delta: other.total_capacity_used as i64 - self.total_capacity_used as i64,
            added_components: after.difference(&before).map(|t| (*t).clone()).collect(),
            removed_components: before.difference(&after).map(|t| (*t).clone()).collect(),
            gained,
            lost,
        }
    }
}

/// Difference between two evaluation results.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultDiff {
    pub effectiveness_delta: f64,
    pub implementation_cost_delta: f64,
    pub maintenance_cost_delta: f64,
    pub capacity_delta: i64,
    pub added_components: Vec<ComponentType>,
    pub removed_components: Vec<ComponentType>,
    pub gained: Vec<Contribution>,
    pub lost: Vec<Contribution>,
}

impl ResultDiff {
    /// Returns true if nothing changed.
    pub fn is_unchanged(&self) -> bool {
        self.effectiveness_delta == 0.0
            && self.implementation_cost_delta == 0.0
            && self.maintenance_cost_delta == 0.0
            && self.capacity_delta == 0
            && self.added_components.is_empty()
            && self.removed_components.is_empty()
            && self.gained.is_empty()
            && self.lost.is_empty()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;

//! Evaluation entry points.
//!
//! [`evaluate`] is the whole pipeline as a pure function of its inputs:
//! validate, enumerate pairs, score, project. [`Engine`] bundles a shared
//! catalog and index so many threads can evaluate against them at once
//! without locking.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use rayon::prelude::*;
use statecraft_config::{ConfigError, ScoringConfig};
use statecraft_core::ValidationError;
use tracing::debug;

use crate::analysis;
use crate::catalog::Catalog;
use crate::evaluator;
use crate::index::RelationshipIndex;
use crate::projector;
use crate::result::EvaluationResult;
use crate::scorer;
use crate::validator::{self, Configuration};

/// Evaluates `configuration` against a catalog and its index.
///
/// Score bounds come from the tiers the index was built with.
///
/// # Errors
///
/// Returns the [`ValidationError`] of the first failing check; no partial
/// result is produced.
pub fn evaluate(
    catalog: &Catalog,
    index: &RelationshipIndex,
    configuration: &Configuration,
) -> Result<EvaluationResult, ValidationError> {
    let validated = validator::validate(configuration, catalog)?;

    let synergy = evaluator::evaluate(&validated, index);
    let aggregate = scorer::score_with(
        validated.components(),
        &synergy.contributions,
        index.scoring(),
    );
    let impact_projection = projector::project(validated.components());
    let component_analyses = analysis::analyze(validated.components(), &synergy.contributions);

    debug!(
        event = "evaluation",
        component_count = validated.len(),
        pairs_considered = synergy.pairs_considered,
        contribution_count = synergy.contributions.len(),
        score = aggregate.clamped,
        warning_count = validated.warnings().len(),
    );

    Ok(EvaluationResult {
        catalog_version: catalog.version().to_string(),
        active_components: validated.component_types().cloned().collect(),
        aggregate_effectiveness: aggregate.clamped,
        raw_effectiveness: aggregate.raw,
        mean_baseline: aggregate.mean_baseline,
        total_implementation_cost: validated.total_implementation_cost(),
        total_maintenance_cost: validated.total_maintenance_cost(),
        total_capacity_used: validated.total_capacity(),
        capacity_budget: validated.capacity_budget(),
        pairs_considered: synergy.pairs_considered,
        contributions: synergy.contributions,
        component_analyses,
        impact_projection,
        validation_warnings: validated.into_warnings(),
    })
}

/// A shared, read-only catalog and index pair.
///
/// Cloning is cheap; clones share the same catalog and index.
///
/// # Example
///
/// ```
/// use statecraft_config::{CatalogSource, ComponentSpec};
/// use statecraft_scoring::{Catalog, Configuration, Engine};
///
/// let source = CatalogSource::new("v1")
///     .with_component(ComponentSpec::new("a", "x", 85.0).with_synergies(["b"]))
///     .with_component(ComponentSpec::new("b", "y", 90.0).with_synergies(["a"]));
/// let engine = Engine::new(Catalog::load(&source).unwrap());
///
/// let result = engine.evaluate(&Configuration::new(["a", "b"])).unwrap();
/// assert_eq!(result.aggregate_effectiveness, 100.0);
/// assert_eq!(result.raw_effectiveness, 102.5);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Arc<Catalog>,
    index: Arc<RelationshipIndex>,
}

impl Engine {
    /// Builds the index with the tiers the catalog was loaded with.
    pub fn new(catalog: Catalog) -> Self {
        let index = RelationshipIndex::build(&catalog);
        Self::from_parts(Arc::new(catalog), Arc::new(index))
    }

    /// Builds the index with custom tiers.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the tiers are inconsistent.
    pub fn with_scoring(catalog: Catalog, scoring: &ScoringConfig) -> Result<Self, ConfigError> {
        scoring.validate()?;
        let index = RelationshipIndex::build_with(&catalog, scoring);
        Ok(Self::from_parts(Arc::new(catalog), Arc::new(index)))
    }

    /// Wraps an already built pair.
    pub fn from_parts(catalog: Arc<Catalog>, index: Arc<RelationshipIndex>) -> Self {
        Self { catalog, index }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &RelationshipIndex {
        &self.index
    }

    /// Evaluates one configuration.
    pub fn evaluate(
        &self,
        configuration: &Configuration,
    ) -> Result<EvaluationResult, ValidationError> {
        evaluate(&self.catalog, &self.index, configuration)
    }

    /// Evaluates a preset shipped with the catalog.
    ///
    /// Returns `None` if the catalog has no preset called `name`.
    pub fn evaluate_preset(
        &self,
        name: &str,
    ) -> Option<Result<EvaluationResult, ValidationError>> {
        self.catalog
            .preset(name)
            .map(|configuration| self.evaluate(configuration))
    }

    /// Evaluates many configurations in parallel.
    ///
    /// Results are returned in input order; each one is independent of the
    /// others.
    pub fn evaluate_batch(
        &self,
        configurations: &[Configuration],
    ) -> Vec<Result<EvaluationResult, ValidationError>> {
        configurations
            .par_iter()
            .map(|configuration| self.evaluate(configuration))
            .collect()
    }
}

/// Run-once holder for a process-wide engine.
///
/// The engine is still passed explicitly to callers; the cell only makes
/// sure the catalog and index are built a single time.
#[derive(Debug, Default)]
pub struct EngineCell {
    cell: OnceLock<Engine>,
    // Serializes fallible initialization; `OnceLock` has no stable
    // `get_or_try_init`.
    init_lock: Mutex<()>,
}

impl EngineCell {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// Returns the engine if it has been initialized.
    pub fn get(&self) -> Option<&Engine> {
        self.cell.get()
    }

    /// Returns the engine, building it with `init` on first use.
    ///
    /// Concurrent first callers block while one of them runs `init`. If
    /// `init` fails the cell stays empty, the error is returned, and the
    /// next caller tries again.
    pub fn get_or_try_init<E>(
        &self,
        init: impl FnOnce() -> Result<Engine, E>,
    ) -> Result<&Engine, E> {
        if let Some(engine) = self.cell.get() {
            return Ok(engine);
        }

        // A panicking initializer never fills the cell, so a poisoned lock
        // guards nothing stale.
        let _guard = self
            .init_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(engine) = self.cell.get() {
            return Ok(engine);
        }
        let engine = init()?;
        Ok(self.cell.get_or_init(|| engine))
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;

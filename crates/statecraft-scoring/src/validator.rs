//! Configuration validation.
//!
//! Checks run in a fixed order: unknown components, single-slot category
//! clashes, then the capacity budget. The first two are fatal; an exceeded
//! budget only produces a warning.

use std::collections::{BTreeMap, BTreeSet};

use statecraft_core::{
    Category, ComponentDefinition, ComponentType, ValidationError, ValidationWarning,
};
use tracing::warn;

use crate::catalog::Catalog;

/// A caller-chosen selection of component types.
///
/// # Example
///
/// ```
/// use statecraft_scoring::Configuration;
///
/// let config = Configuration::new(["senate", "judiciary"]).with_capacity_budget(8);
/// assert_eq!(config.active_components.len(), 2);
/// assert_eq!(config.capacity_budget, Some(8));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Configuration {
    pub active_components: Vec<ComponentType>,
    pub capacity_budget: Option<u64>,
}

impl Configuration {
    pub fn new<I, T>(components: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ComponentType>,
    {
        Self {
            active_components: components.into_iter().map(Into::into).collect(),
            capacity_budget: None,
        }
    }

    /// A configuration with no active components.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_capacity_budget(mut self, budget: u64) -> Self {
        self.capacity_budget = Some(budget);
        self
    }

    /// Adds a component to the selection.
    pub fn with_component(mut self, component: impl Into<ComponentType>) -> Self {
        self.active_components.push(component.into());
        self
    }
}

/// A configuration that passed validation, resolved against its catalog.
///
/// Components are distinct and sorted by type.
#[derive(Debug, Clone)]
pub struct ValidatedConfiguration<'c> {
    components: Vec<&'c ComponentDefinition>,
    capacity_budget: Option<u64>,
    warnings: Vec<ValidationWarning>,
}

impl<'c> ValidatedConfiguration<'c> {
    /// Active definitions, sorted by type.
    pub fn components(&self) -> &[&'c ComponentDefinition] {
        &self.components
    }

    /// Active types, sorted.
    pub fn component_types(&self) -> impl Iterator<Item = &'c ComponentType> + '_ {
        self.components.iter().copied().map(|d| &d.component_type)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn capacity_budget(&self) -> Option<u64> {
        self.capacity_budget
    }

    /// Sum of `required_capacity` over the active components.
    pub fn total_capacity(&self) -> u64 {
        self.components
            .iter()
            .map(|d| u64::from(d.required_capacity))
            .sum()
    }

    pub fn total_implementation_cost(&self) -> f64 {
        self.components.iter().map(|d| d.implementation_cost).sum()
    }

    pub fn total_maintenance_cost(&self) -> f64 {
        self.components.iter().map(|d| d.maintenance_cost).sum()
    }

    /// Non-fatal findings, in the order they were detected.
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    pub(crate) fn into_warnings(self) -> Vec<ValidationWarning> {
        self.warnings
    }
}

/// Validates `configuration` against `catalog`.
///
/// Duplicate entries are collapsed and reported as warnings. Has no side
/// effects beyond logging.
///
/// # Errors
///
/// - [`ValidationError::UnknownComponent`] for the first entry (in caller
///   order) that the catalog does not define.
/// - [`ValidationError::CategoryConflict`] when two active components share
///   a single-slot category; `first` sorts before `second`.
pub fn validate<'c>(
    configuration: &Configuration,
    catalog: &'c Catalog,
) -> Result<ValidatedConfiguration<'c>, ValidationError> {
    let mut warnings = Vec::new();

    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    for component in &configuration.active_components {
        if !catalog.contains(component) {
            return Err(ValidationError::UnknownComponent(component.clone()));
        }
        if !seen.insert(component) && reported.insert(component) {
            warnings.push(ValidationWarning::DuplicateComponent(component.clone()));
        }
    }

    // `seen` is ordered, so the definitions come out sorted by type.
    let components: Vec<&'c ComponentDefinition> =
        seen.iter().filter_map(|t| catalog.get(t)).collect();

    let mut occupied: BTreeMap<&Category, &ComponentType> = BTreeMap::new();
    for definition in &components {
        if !catalog.is_single_slot(&definition.category) {
            continue;
        }
        if let Some(first) = occupied.insert(&definition.category, &definition.component_type) {
            return Err(ValidationError::CategoryConflict {
                category: definition.category.clone(),
                first: first.clone(),
                second: definition.component_type.clone(),
            });
        }
    }

    let mut validated = ValidatedConfiguration {
        components,
        capacity_budget: configuration.capacity_budget,
        warnings,
    };

    if let Some(budget) = configuration.capacity_budget {
        let used = validated.total_capacity();
        if used > budget {
            warn!(event = "capacity_exceeded", used, budget);
            validated
                .warnings
                .push(ValidationWarning::CapacityExceeded { used, budget });
        }
    }

    Ok(validated)
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;

//! The component catalog.
//!
//! Built once from a [`CatalogSource`] and read-only afterwards. Loading
//! validates the whole source up front; a single bad definition aborts the
//! build and no partial catalog is ever returned.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use statecraft_config::{CatalogSource, ComponentSpec, ConfigError, ScoringConfig};
use statecraft_core::{
    Category, CatalogError, ComponentDefinition, ComponentType, DefinitionIssue,
};
use tracing::info;

use crate::validator::Configuration;

/// Immutable, versioned set of component definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    version: String,
    definitions: HashMap<ComponentType, ComponentDefinition>,
    // Sorted, for deterministic iteration.
    types: Vec<ComponentType>,
    single_slot: BTreeSet<Category>,
    presets: BTreeMap<String, Configuration>,
    scoring: ScoringConfig,
}

impl Catalog {
    /// Parses and validates a definition source.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidDefinition`] for out-of-range baselines,
    /// negative or non-finite costs, non-finite coefficients, duplicate
    /// types, self references, overlapping synergy/conflict declarations or
    /// references to unknown types. Preset and category metadata problems
    /// have their own variants, and an inconsistent embedded `[scoring]`
    /// table is [`CatalogError::InvalidScoring`].
    ///
    /// # Example
    ///
    /// ```
    /// use statecraft_config::{CatalogSource, ComponentSpec};
    /// use statecraft_scoring::Catalog;
    ///
    /// let source = CatalogSource::new("v1")
    ///     .with_component(ComponentSpec::new("senate", "legislative", 68.0))
    ///     .with_component(ComponentSpec::new("judiciary", "judicial", 75.0));
    ///
    /// let catalog = Catalog::load(&source).unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// assert_eq!(catalog.version(), "v1");
    /// assert!(catalog.get(&"senate".into()).is_some());
    /// assert!(catalog.get(&"monarchy".into()).is_none());
    /// ```
    pub fn load(source: &CatalogSource) -> Result<Self, CatalogError> {
        let scoring = source.scoring();
        scoring.validate().map_err(|err| match err {
            ConfigError::Invalid(message) => CatalogError::InvalidScoring(message),
            other => CatalogError::InvalidScoring(other.to_string()),
        })?;

        if source.components.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let single_slot = collect_single_slot(source)?;

        let mut definitions = HashMap::with_capacity(source.components.len());
        for spec in &source.components {
            let definition = convert(spec)?;
            if definitions.contains_key(&definition.component_type) {
                return Err(CatalogError::invalid(
                    &definition.component_type,
                    DefinitionIssue::DuplicateType,
                ));
            }
            definitions.insert(definition.component_type.clone(), definition);
        }

        // Relationship checks need every type to be known first.
        for spec in &source.components {
            let component = ComponentType::new(spec.component_type.as_str());
            check_relationships(&definitions[&component], &definitions)?;
        }

        let presets = collect_presets(source, &definitions)?;

        let mut types: Vec<ComponentType> = definitions.keys().cloned().collect();
        types.sort();

        info!(
            event = "catalog_loaded",
            version = %source.version,
            component_count = types.len(),
            single_slot_categories = single_slot.len(),
            preset_count = presets.len(),
        );

        Ok(Self {
            version: source.version.clone(),
            definitions,
            types,
            single_slot,
            presets,
            scoring,
        })
    }

    /// Returns the version label of the source data.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the tiers embedded in the source, or the defaults.
    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Looks up a definition. Absence is not an error at this layer.
    pub fn get(&self, component: &ComponentType) -> Option<&ComponentDefinition> {
        self.definitions.get(component)
    }

    /// Returns true if the catalog defines `component`.
    pub fn contains(&self, component: &ComponentType) -> bool {
        self.definitions.contains_key(component)
    }

    /// Iterates over all component types in lexicographic order.
    pub fn all_types(&self) -> impl Iterator<Item = &ComponentType> {
        self.types.iter()
    }

    /// Iterates over all definitions in lexicographic type order.
    pub fn definitions(&self) -> impl Iterator<Item = &ComponentDefinition> {
        self.types.iter().map(|t| &self.definitions[t])
    }

    /// Returns true if at most one active component may use `category`.
    pub fn is_single_slot(&self, category: &Category) -> bool {
        self.single_slot.contains(category)
    }

    /// Returns a preset configuration by name.
    pub fn preset(&self, name: &str) -> Option<&Configuration> {
        self.presets.get(name)
    }

    /// Iterates over preset names in lexicographic order.
    pub fn preset_names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    /// Number of component definitions.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false for a loaded catalog; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

fn collect_single_slot(source: &CatalogSource) -> Result<BTreeSet<Category>, CatalogError> {
    let mut seen = HashSet::new();
    let mut single_slot = BTreeSet::new();
    for spec in &source.categories {
        let category = Category::new(spec.name.as_str());
        if !seen.insert(category.clone()) {
            return Err(CatalogError::DuplicateCategory(category));
        }
        if spec.single_slot {
            single_slot.insert(category);
        }
    }
    Ok(single_slot)
}

// Checks everything that can be checked on a definition in isolation.
fn convert(spec: &ComponentSpec) -> Result<ComponentDefinition, CatalogError> {
    let component = ComponentType::new(spec.component_type.as_str());
    let fail = |issue| Err(CatalogError::invalid(&component, issue));

    if !(0.0..=100.0).contains(&spec.baseline_effectiveness) {
        return fail(DefinitionIssue::BaselineOutOfRange(
            spec.baseline_effectiveness,
        ));
    }

    for (field, value) in [
        ("implementation_cost", spec.implementation_cost),
        ("maintenance_cost", spec.maintenance_cost),
    ] {
        if !value.is_finite() {
            return fail(DefinitionIssue::NonFiniteCoefficient(field.to_string()));
        }
        if value < 0.0 {
            return fail(DefinitionIssue::NegativeCost { field, value });
        }
    }

    let domain_impact = spec.domain_impact.to_domain_impact();
    if let Some((label, _)) = domain_impact.coefficients().find(|(_, v)| !v.is_finite()) {
        return fail(DefinitionIssue::NonFiniteCoefficient(label));
    }

    Ok(ComponentDefinition {
        component_type: component.clone(),
        category: Category::new(spec.category.as_str()),
        name: spec
            .name
            .clone()
            .unwrap_or_else(|| spec.component_type.clone()),
        baseline_effectiveness: spec.baseline_effectiveness,
        implementation_cost: spec.implementation_cost,
        maintenance_cost: spec.maintenance_cost,
        required_capacity: spec.required_capacity,
        synergy_types: spec
            .synergy_types
            .iter()
            .map(|t| ComponentType::new(t.as_str()))
            .collect(),
        conflict_types: spec
            .conflict_types
            .iter()
            .map(|t| ComponentType::new(t.as_str()))
            .collect(),
        domain_impact,
    })
}

fn check_relationships(
    definition: &ComponentDefinition,
    definitions: &HashMap<ComponentType, ComponentDefinition>,
) -> Result<(), CatalogError> {
    let component = &definition.component_type;
    let fail = |issue| Err(CatalogError::invalid(component, issue));

    if definition.synergy_types.contains(component) || definition.conflict_types.contains(component)
    {
        return fail(DefinitionIssue::SelfReference);
    }
    if let Some(overlap) = definition
        .synergy_types
        .intersection(&definition.conflict_types)
        .next()
    {
        return fail(DefinitionIssue::SynergyConflictOverlap(overlap.clone()));
    }
    if let Some(missing) = definition
        .synergy_types
        .iter()
        .find(|t| !definitions.contains_key(*t))
    {
        return fail(DefinitionIssue::UnknownSynergyTarget(missing.clone()));
    }
    if let Some(missing) = definition
        .conflict_types
        .iter()
        .find(|t| !definitions.contains_key(*t))
    {
        return fail(DefinitionIssue::UnknownConflictTarget(missing.clone()));
    }
    Ok(())
}

fn collect_presets(
    source: &CatalogSource,
    definitions: &HashMap<ComponentType, ComponentDefinition>,
) -> Result<BTreeMap<String, Configuration>, CatalogError> {
    let mut presets = BTreeMap::new();
    for spec in &source.presets {
        let invalid = |issue| CatalogError::InvalidPreset {
            preset: spec.name.clone(),
            issue,
        };
        if presets.contains_key(&spec.name) {
            return Err(invalid(DefinitionIssue::DuplicatePreset));
        }
        if let Some(missing) = spec
            .components
            .iter()
            .map(|name| ComponentType::new(name.as_str()))
            .find(|t| !definitions.contains_key(t))
        {
            return Err(invalid(DefinitionIssue::UnknownPresetComponent(missing)));
        }

        let mut configuration = Configuration::new(spec.components.iter().map(String::as_str));
        configuration.capacity_budget = spec.capacity_budget;
        presets.insert(spec.name.clone(), configuration);
    }
    Ok(presets)
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;

//! Builder for hand-made catalogs.
//!
//! # Example
//!
//! ```
//! use statecraft_test::CatalogBuilder;
//!
//! let source = CatalogBuilder::new()
//!     .single_slot("head_of_state")
//!     .component("presidency", "head_of_state", 72.0)
//!     .component("monarchy", "head_of_state", 60.0)
//!     .mutual_synergy("presidency", "monarchy")
//!     .build_source();
//!
//! assert_eq!(source.components.len(), 2);
//! assert!(source.categories[0].single_slot);
//! ```

use statecraft_config::{CatalogSource, ComponentSpec, PresetSpec, ScoringConfig};

/// Accumulates a `CatalogSource` one component at a time.
///
/// Relationship helpers look up components added earlier and panic if the
/// declaring component is missing; they are meant for tests only.
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    source: CatalogSource,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            source: CatalogSource::new("test"),
        }
    }

    pub fn version(mut self, version: &str) -> Self {
        self.source.version = version.to_string();
        self
    }

    /// Declares a single-slot category.
    pub fn single_slot(mut self, category: &str) -> Self {
        self.source = self.source.with_category(category, true);
        self
    }

    /// Adds a component with no costs, coefficients or relationships.
    pub fn component(self, component_type: &str, category: &str, baseline: f64) -> Self {
        self.spec(ComponentSpec::new(component_type, category, baseline))
    }

    /// Adds a fully specified component.
    pub fn spec(mut self, spec: ComponentSpec) -> Self {
        self.source = self.source.with_component(spec);
        self
    }

    /// `from` declares a synergy with `to`.
    pub fn synergy(mut self, from: &str, to: &str) -> Self {
        self.find(from).synergy_types.push(to.to_string());
        self
    }

    /// Both sides declare a synergy with each other.
    pub fn mutual_synergy(self, a: &str, b: &str) -> Self {
        self.synergy(a, b).synergy(b, a)
    }

    /// `from` declares a conflict with `to`.
    pub fn conflict(mut self, from: &str, to: &str) -> Self {
        self.find(from).conflict_types.push(to.to_string());
        self
    }

    /// Sets the capacity requirement of an existing component.
    pub fn capacity(mut self, component_type: &str, capacity: u32) -> Self {
        self.find(component_type).required_capacity = capacity;
        self
    }

    /// Sets a sector multiplier on an existing component.
    pub fn sector(mut self, component_type: &str, sector: &str, multiplier: f64) -> Self {
        self.find(component_type)
            .domain_impact
            .sector_multipliers
            .insert(sector.to_string(), multiplier);
        self
    }

    pub fn preset(mut self, name: &str, components: &[&str]) -> Self {
        self.source = self
            .source
            .with_preset(PresetSpec::new(name, components.iter().copied()));
        self
    }

    pub fn scoring(mut self, scoring: ScoringConfig) -> Self {
        self.source = self.source.with_scoring(scoring);
        self
    }

    pub fn build_source(self) -> CatalogSource {
        self.source
    }

    fn find(&mut self, component_type: &str) -> &mut ComponentSpec {
        self.source
            .components
            .iter_mut()
            .find(|c| c.component_type == component_type)
            .unwrap_or_else(|| panic!("component '{component_type}' not added yet"))
    }
}

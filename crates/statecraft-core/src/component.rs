//! Component identifiers and definitions.
//!
//! A component is one atomic building block of a country's policy
//! configuration: a government institution, an economic system, a fiscal
//! instrument. Definitions are immutable once a catalog has been built.

use std::collections::BTreeSet;
use std::fmt;

use crate::impact::DomainImpact;

/// Unique identifier of a component, the primary key for every lookup.
///
/// Ordering is lexicographic, which is what makes pair canonicalization and
/// contribution tie-breaks deterministic.
///
/// # Example
///
/// ```
/// use statecraft_core::ComponentType;
///
/// let a = ComponentType::new("central_bank");
/// let b = ComponentType::from("tax_authority");
/// assert!(a < b);
/// assert_eq!(a.as_str(), "central_bank");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ComponentType(String);

impl ComponentType {
    /// Creates a component type from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ComponentType {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Taxonomy bucket a component belongs to (e.g. "executive", "monetary").
///
/// Whether a category admits more than one active component is catalog
/// metadata, not a property of the category name itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Category(String);

impl Category {
    /// Creates a category from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the category name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// One catalog entry.
///
/// Instances are only produced by catalog loading, which guarantees:
/// - `baseline_effectiveness` lies in `[0, 100]`
/// - costs are non-negative
/// - `synergy_types` and `conflict_types` are disjoint and never contain
///   `component_type` itself
/// - every referenced type exists in the same catalog
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentDefinition {
    /// Primary key.
    pub component_type: ComponentType,
    /// Slot bucket used by category uniqueness rules.
    pub category: Category,
    /// Human-readable label.
    pub name: String,
    /// Standalone contribution, in `[0, 100]`.
    pub baseline_effectiveness: f64,
    /// One-off cost of introducing the component.
    pub implementation_cost: f64,
    /// Recurring cost of keeping the component active.
    pub maintenance_cost: f64,
    /// Administrative load consumed while active.
    pub required_capacity: u32,
    /// Types this component pairs well with.
    pub synergy_types: BTreeSet<ComponentType>,
    /// Types this component clashes with.
    pub conflict_types: BTreeSet<ComponentType>,
    /// Coefficients consumed by the impact projector.
    pub domain_impact: DomainImpact,
}

impl ComponentDefinition {
    /// Returns true if this definition declares a synergy with `other`.
    pub fn declares_synergy_with(&self, other: &ComponentType) -> bool {
        self.synergy_types.contains(other)
    }

    /// Returns true if this definition declares a conflict with `other`.
    pub fn declares_conflict_with(&self, other: &ComponentType) -> bool {
        self.conflict_types.contains(other)
    }
}

//! Error types for Statecraft

use thiserror::Error;

use crate::component::{Category, ComponentType};

/// What is wrong with a single catalog definition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DefinitionIssue {
    #[error("synergy target '{0}' does not exist in the catalog")]
    UnknownSynergyTarget(ComponentType),

    #[error("conflict target '{0}' does not exist in the catalog")]
    UnknownConflictTarget(ComponentType),

    #[error("'{0}' is declared as both synergy and conflict")]
    SynergyConflictOverlap(ComponentType),

    #[error("component lists itself as a synergy or conflict")]
    SelfReference,

    #[error("baseline effectiveness {0} is outside [0, 100]")]
    BaselineOutOfRange(f64),

    #[error("{field} must be non-negative, got {value}")]
    NegativeCost { field: &'static str, value: f64 },

    #[error("component type is defined more than once")]
    DuplicateType,

    #[error("coefficient {0} is not a finite number")]
    NonFiniteCoefficient(String),

    #[error("preset references unknown component '{0}'")]
    UnknownPresetComponent(ComponentType),

    #[error("preset name is defined more than once")]
    DuplicatePreset,
}

/// Catalog construction failure. Fatal: no partial catalog is ever built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Malformed or self-inconsistent component data.
    #[error("invalid definition for component '{component}': {issue}")]
    InvalidDefinition {
        component: ComponentType,
        issue: DefinitionIssue,
    },

    /// A preset that cannot be turned into a configuration.
    #[error("invalid preset '{preset}': {issue}")]
    InvalidPreset {
        preset: String,
        issue: DefinitionIssue,
    },

    /// The same category declared twice in the category metadata.
    #[error("category '{0}' is declared more than once")]
    DuplicateCategory(Category),

    /// The source defines no components at all.
    #[error("catalog defines no components")]
    EmptyCatalog,

    /// The embedded scoring tiers are inconsistent.
    #[error("invalid scoring tiers: {0}")]
    InvalidScoring(String),
}

impl CatalogError {
    /// Shorthand used by catalog loaders.
    pub fn invalid(component: &ComponentType, issue: DefinitionIssue) -> Self {
        CatalogError::InvalidDefinition {
            component: component.clone(),
            issue,
        }
    }
}

/// Per-call validation failure. Fatal to that evaluation only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The configuration names a type that is not in the catalog.
    #[error("unknown component '{0}'")]
    UnknownComponent(ComponentType),

    /// Two active components occupy the same single-slot category.
    #[error("category '{category}' allows one component, but both '{first}' and '{second}' are active")]
    CategoryConflict {
        category: Category,
        first: ComponentType,
        second: ComponentType,
    },
}

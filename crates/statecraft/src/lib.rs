//! Statecraft - Component Synergy and Effectiveness Evaluation
//!
//! Load a catalog of atomic components, pick a configuration, and get back
//! an explainable effectiveness score with its blended domain impact.
//!
//! # Example
//!
//! ```rust
//! use statecraft::prelude::*;
//!
//! let source = CatalogSource::new("v1")
//!     .with_category("head_of_state", true)
//!     .with_component(ComponentSpec::new("presidency", "head_of_state", 72.0))
//!     .with_component(
//!         ComponentSpec::new("bicameral_legislature", "legislature", 70.0)
//!             .with_synergies(["presidency"]),
//!     );
//!
//! let engine = statecraft::build_engine(&source).unwrap();
//! let result = engine
//!     .evaluate(&Configuration::new(["presidency", "bicameral_legislature"]))
//!     .unwrap();
//!
//! // mean 71 plus one moderate synergy
//! assert_eq!(result.aggregate_effectiveness, 81.0);
//! ```

// Domain types
pub use statecraft_core::{
    CanonicalPair, Category, ComponentDefinition, ComponentType, Contribution, DomainImpact,
    EmploymentModifiers, OptimalRates, RateKind, RelationshipEntry, RelationshipKind,
    ValidationWarning,
};

// Errors from each layer
pub use statecraft_config::ConfigError;
pub use statecraft_core::{CatalogError, DefinitionIssue, ValidationError};

// Definition sources
pub use statecraft_config::{CatalogSource, ComponentSpec, PresetSpec, ScoringConfig};

// Evaluation
pub use statecraft_scoring::{
    validate, AggregateScore, Catalog, ComponentAnalysis, Configuration, Engine, EngineCell,
    EvaluationResult, ImpactProjection, RelationshipIndex, ResultDiff, ValidatedConfiguration,
};

mod error;
mod loader;

pub use error::{Result, StatecraftError};
pub use loader::{
    build_catalog, build_engine, build_engine_from_file, build_engine_from_toml_str, evaluate,
    evaluate_preset,
};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        CatalogSource, ComponentSpec, Configuration, Engine, EvaluationResult, PresetSpec,
        RelationshipKind, ScoringConfig, StatecraftError,
    };
}

#[cfg(test)]
mod tests;

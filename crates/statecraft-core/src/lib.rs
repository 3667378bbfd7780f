//! Statecraft Core - value types shared by every Statecraft crate
//!
//! This crate provides the fundamental vocabulary of the evaluation engine:
//! - Component identifiers and immutable component definitions
//! - Domain impact coefficients (optimal rates, sector multipliers, employment)
//! - Relationship classifications and canonical pairs
//! - Error and warning taxonomies
//!
//! Nothing here performs I/O or holds shared state.

pub mod component;
pub mod error;
pub mod impact;
pub mod relationship;
pub mod warning;

pub use component::{Category, ComponentDefinition, ComponentType};
pub use error::{CatalogError, DefinitionIssue, ValidationError};
pub use impact::{DomainImpact, EmploymentModifiers, OptimalRates, RateKind};
pub use relationship::{CanonicalPair, Contribution, RelationshipEntry, RelationshipKind};
pub use warning::ValidationWarning;

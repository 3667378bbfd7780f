//! Synergy evaluation and effectiveness scoring for Statecraft.
//!
//! Data flows strictly downward:
//! - [`Catalog`] is loaded once from a definition source
//! - [`RelationshipIndex`] is built once from the catalog
//! - [`validator`] checks a [`Configuration`] against the catalog
//! - [`evaluator`] enumerates the active pairs through the index
//! - [`scorer`] and [`projector`] fold the selection into numbers
//! - [`EvaluationResult`] carries everything back to the caller
//!
//! # Concurrency
//!
//! Catalog and index are immutable after construction and are shared behind
//! `Arc` by [`Engine`]. Evaluation never blocks, performs no I/O and keeps no
//! state between calls.

pub mod analysis;
pub mod catalog;
pub mod engine;
pub mod evaluator;
pub mod index;
pub mod projector;
pub mod result;
pub mod scorer;
pub mod validator;

pub use analysis::ComponentAnalysis;
pub use catalog::Catalog;
pub use engine::{evaluate, Engine, EngineCell};
pub use evaluator::SynergyEvaluation;
pub use index::RelationshipIndex;
pub use projector::ImpactProjection;
pub use result::{EvaluationResult, ResultDiff};
pub use scorer::AggregateScore;
pub use validator::{validate, Configuration, ValidatedConfiguration};

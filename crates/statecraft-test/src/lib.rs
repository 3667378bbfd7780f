//! Shared test fixtures for Statecraft crates.
//!
//! This crate provides catalog sources and a small builder for ad-hoc
//! catalogs. It does NOT depend on `statecraft-scoring` to avoid circular
//! dependencies; fixtures are returned as `CatalogSource` values and each
//! test loads them itself.
//!
//! - [`builder`] - terse builder for hand-made catalogs
//! - [`government`] - institutions, with single-slot categories and presets
//! - [`economy`] - economic systems and fiscal instruments with coefficients
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! statecraft-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use statecraft_test::{government, CatalogBuilder};
//! ```

pub mod builder;
pub mod economy;
pub mod government;

pub use builder::CatalogBuilder;

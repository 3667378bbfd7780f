//! Entry points that go from a definition source to a ready engine.

use std::path::Path;

use statecraft_config::CatalogSource;
use statecraft_scoring::{Catalog, Configuration, Engine, EvaluationResult, RelationshipIndex};

use crate::error::{Result, StatecraftError};

/// Loads the catalog and builds its index with the source's scoring tiers.
///
/// Tiers are validated before the catalog is touched.
pub fn build_catalog(source: &CatalogSource) -> Result<(Catalog, RelationshipIndex)> {
    source.scoring().validate()?;

    let catalog = Catalog::load(source)?;
    let index = RelationshipIndex::build(&catalog);
    Ok((catalog, index))
}

/// Builds a shareable engine from an in-memory source.
pub fn build_engine(source: &CatalogSource) -> Result<Engine> {
    let (catalog, index) = build_catalog(source)?;
    Ok(Engine::from_parts(catalog.into(), index.into()))
}

/// Builds an engine from a TOML string.
pub fn build_engine_from_toml_str(s: &str) -> Result<Engine> {
    build_engine(&CatalogSource::from_toml_str(s)?)
}

/// Builds an engine from a TOML or YAML file, picked by extension.
pub fn build_engine_from_file<P: AsRef<Path>>(path: P) -> Result<Engine> {
    build_engine(&CatalogSource::load(path)?)
}

/// One-shot evaluation of a configuration against a source.
///
/// Rebuilds the catalog and index on every call; use an [`Engine`] when
/// evaluating more than once.
pub fn evaluate(source: &CatalogSource, configuration: &Configuration) -> Result<EvaluationResult> {
    let (catalog, index) = build_catalog(source)?;
    Ok(statecraft_scoring::evaluate(&catalog, &index, configuration)?)
}

/// Evaluates a named preset, treating an unknown name as an error.
pub fn evaluate_preset(engine: &Engine, name: &str) -> Result<EvaluationResult> {
    match engine.evaluate_preset(name) {
        Some(result) => Ok(result?),
        None => Err(StatecraftError::UnknownPreset(name.to_string())),
    }
}

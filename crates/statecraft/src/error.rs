//! Top-level error type.

use statecraft_config::ConfigError;
use statecraft_core::{CatalogError, ValidationError};
use thiserror::Error;

/// Any failure surfaced by the facade.
///
/// Each layer keeps its own error type; this enum only gathers them so
/// callers that go from a file to a result can use `?` throughout.
#[derive(Debug, Error)]
pub enum StatecraftError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("no preset named '{0}'")]
    UnknownPreset(String),
}

/// Result alias for facade operations.
pub type Result<T, E = StatecraftError> = std::result::Result<T, E>;

//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::constants::DimValidationError;
use crate::embedding::EmbeddingError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Combiner weights are negative, non-finite, or do not sum to one.
    #[error("invalid scoring weights: {reason}")]
    InvalidWeights { reason: String },

    /// BM25 `k1` / `b` out of range.
    #[error("invalid BM25 parameters: {reason}")]
    InvalidBm25Params { reason: String },

    /// An environment variable was set but could not be parsed.
    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Embedding settings rejected by the provider.
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
}

impl From<DimValidationError> for ConfigError {
    fn from(err: DimValidationError) -> Self {
        ConfigError::Embedding(err.into())
    }
}

use std::path::PathBuf;

use crate::constants::{
    DEFAULT_EMBEDDING_DIM, DEFAULT_MODEL_ID, DimValidationError, FALLBACK_MAX_WORDS,
    MAX_EMBED_WORDS,
};
use crate::embedding::error::EmbeddingError;

#[derive(Debug, Clone, PartialEq)]
/// Configuration for [`EmbeddingProvider`](super::EmbeddingProvider).
pub struct EmbeddingConfig {
    /// Directory holding `config.json`, `model.safetensors` and `tokenizer.json`.
    /// `None` means hash fallback only.
    pub model_path: Option<PathBuf>,
    /// Model identifier (informational; logged and reported).
    pub model_id: String,
    /// Output dimension `D`. Must equal the model's hidden size when a model is loaded.
    pub embedding_dim: usize,
    /// Words kept by preprocessing.
    pub max_words: usize,
    /// Words the hash fallback looks at.
    pub fallback_max_words: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            model_id: DEFAULT_MODEL_ID.to_string(),
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            max_words: MAX_EMBED_WORDS,
            fallback_max_words: FALLBACK_MAX_WORDS,
        }
    }
}

impl EmbeddingConfig {
    /// Env var used to locate the model directory.
    pub const ENV_MODEL_PATH: &'static str = "JOBMATCH_MODEL_PATH";
    /// Env var overriding the model identifier.
    pub const ENV_MODEL_ID: &'static str = "JOBMATCH_MODEL_ID";
    /// Env var overriding the embedding dimension.
    pub const ENV_EMBEDDING_DIM: &'static str = "JOBMATCH_EMBEDDING_DIM";

    /// Config for a model directory, all other fields at their defaults.
    pub fn new<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_path: Some(model_path.into()),
            ..Default::default()
        }
    }

    /// Config that never loads a model.
    pub fn hash_only() -> Self {
        Self::default()
    }

    /// Same config with a different dimension.
    pub fn with_dim(mut self, embedding_dim: usize) -> Self {
        self.embedding_dim = embedding_dim;
        self
    }

    /// Rejects values that would make every embedding meaningless.
    ///
    /// A missing model directory is *not* an error here: it is handled by falling back.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.embedding_dim == 0 {
            return Err(DimValidationError::ZeroDimension.into());
        }

        if self.max_words == 0 || self.fallback_max_words == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "word limits must be greater than zero".to_string(),
            });
        }

        if self.model_id.trim().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_id cannot be empty".to_string(),
            });
        }

        if let Some(ref path) = self.model_path
            && path.as_os_str().is_empty()
        {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_path cannot be empty when provided".to_string(),
            });
        }

        Ok(())
    }

    /// Returns `true` if a model directory is configured and exists.
    pub fn model_available(&self) -> bool {
        self.model_path.as_ref().is_some_and(|p| p.is_dir())
    }
}

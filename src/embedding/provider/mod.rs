//! Embedding provider: model-backed sentence embeddings with a deterministic hash fallback.
//!
//! The provider is a two-state machine:
//!
//! - [`ProviderState::ModelBacked`]: a [`SentenceModel`] loaded at construction. An inference
//!   failure (error or wrong-sized output) degrades *that call* to the hash fallback, logs a
//!   warning and bumps [`EmbeddingProvider::degraded_calls`].
//! - [`ProviderState::HashFallback`]: no model (not configured, or failed to load). This state
//!   is permanent for the provider's lifetime; loading is never retried.
//!
//! `generate*` never return errors. Construction only fails on invalid configuration.

/// Provider configuration.
pub mod config;

#[cfg(test)]
mod tests;

pub use config::EmbeddingConfig;

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::constants::validate_embedding_dim;
use crate::embedding::bert::BertSentenceModel;
use crate::embedding::device::select_device;
use crate::embedding::error::EmbeddingError;
use crate::embedding::fallback::{hash_embedding, preprocess_text};
use crate::embedding::model::SentenceModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Which path produces embeddings.
pub enum ProviderState {
    ModelBacked,
    HashFallback,
}

enum Backend {
    Model(Box<dyn SentenceModel>),
    HashFallback { reason: String },
}

/// Text → fixed-length vector.
pub struct EmbeddingProvider {
    backend: Backend,
    config: EmbeddingConfig,
    degraded_calls: AtomicU64,
}

impl std::fmt::Debug for EmbeddingProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingProvider")
            .field(
                "backend",
                &match &self.backend {
                    Backend::Model(model) => format!("Model({})", model.model_id()),
                    Backend::HashFallback { reason } => format!("HashFallback({})", reason),
                },
            )
            .field("embedding_dim", &self.config.embedding_dim)
            .field("degraded_calls", &self.degraded_calls())
            .finish()
    }
}

impl EmbeddingProvider {
    /// Builds a provider, loading the BERT model from `config.model_path` if set.
    ///
    /// A missing or broken model leaves the provider in [`ProviderState::HashFallback`].
    /// A model whose output size differs from `config.embedding_dim` is a configuration
    /// error.
    pub fn load(config: EmbeddingConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        let Some(model_path) = config.model_path.clone() else {
            info!(
                embedding_dim = config.embedding_dim,
                "No embedding model configured, using hash fallback"
            );
            return Ok(Self::fallback(config, "no model configured".to_string()));
        };

        let device = select_device();
        debug!(?device, "Selected compute device for sentence embeddings");

        match BertSentenceModel::load(&model_path, &config.model_id, device) {
            Ok(model) => Self::with_model(config, Box::new(model)),
            Err(e) => {
                warn!(
                    error = %e,
                    model_id = %config.model_id,
                    model_path = %model_path.display(),
                    "Embedding model unavailable, using hash fallback for the process lifetime"
                );
                Ok(Self::fallback(config, e.to_string()))
            }
        }
    }

    /// Builds a model-backed provider around an already-loaded model.
    pub fn with_model(
        config: EmbeddingConfig,
        model: Box<dyn SentenceModel>,
    ) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if model.dimension() != config.embedding_dim {
            return Err(EmbeddingError::InvalidConfig {
                reason: format!(
                    "embedding_dim ({}) does not match model '{}' output dimension ({})",
                    config.embedding_dim,
                    model.model_id(),
                    model.dimension()
                ),
            });
        }

        info!(
            model_id = model.model_id(),
            embedding_dim = config.embedding_dim,
            "Embedding provider is model-backed"
        );

        Ok(Self {
            backend: Backend::Model(model),
            config,
            degraded_calls: AtomicU64::new(0),
        })
    }

    /// Builds a provider that only uses the hash fallback.
    pub fn hash_fallback(config: EmbeddingConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;
        Ok(Self::fallback(config, "hash fallback requested".to_string()))
    }

    fn fallback(config: EmbeddingConfig, reason: String) -> Self {
        Self {
            backend: Backend::HashFallback { reason },
            config,
            degraded_calls: AtomicU64::new(0),
        }
    }

    /// Embeds one text. Empty or whitespace-only text yields `D` zeros.
    pub fn generate(&self, text: &str) -> Vec<f32> {
        let cleaned = preprocess_text(text, self.config.max_words);
        if cleaned.is_empty() {
            return self.zero_vector();
        }

        match &self.backend {
            Backend::Model(model) => match self.checked_encode(model.as_ref(), &cleaned) {
                Ok(embedding) => embedding,
                Err(e) => {
                    self.record_degradation(&e, 1);
                    self.fallback_embedding(&cleaned)
                }
            },
            Backend::HashFallback { .. } => self.fallback_embedding(&cleaned),
        }
    }

    /// Embeds many texts, one vector per input, in input order.
    ///
    /// Per-text semantics match [`generate`](Self::generate). If the model fails on the batch,
    /// every non-empty text in it falls back.
    pub fn generate_batch(&self, texts: &[&str]) -> Vec<Vec<f32>> {
        let cleaned: Vec<String> = texts
            .iter()
            .map(|text| preprocess_text(text, self.config.max_words))
            .collect();

        let mut results: Vec<Vec<f32>> = vec![Vec::new(); texts.len()];
        let mut pending: Vec<usize> = Vec::with_capacity(texts.len());
        for (idx, text) in cleaned.iter().enumerate() {
            if text.is_empty() {
                results[idx] = self.zero_vector();
            } else {
                pending.push(idx);
            }
        }

        if pending.is_empty() {
            return results;
        }

        debug!(
            total = texts.len(),
            non_empty = pending.len(),
            state = ?self.state(),
            "Generating batch embeddings"
        );

        let batch: Vec<&str> = pending.iter().map(|&idx| cleaned[idx].as_str()).collect();

        let encoded = match &self.backend {
            Backend::Model(model) => match self.checked_encode_batch(model.as_ref(), &batch) {
                Ok(vectors) => Some(vectors),
                Err(e) => {
                    self.record_degradation(&e, pending.len() as u64);
                    None
                }
            },
            Backend::HashFallback { .. } => None,
        };

        match encoded {
            Some(vectors) => {
                for (idx, vector) in pending.into_iter().zip(vectors) {
                    results[idx] = vector;
                }
            }
            None => {
                for idx in pending {
                    results[idx] = self.fallback_embedding(&cleaned[idx]);
                }
            }
        }

        results
    }

    fn checked_encode(
        &self,
        model: &dyn SentenceModel,
        text: &str,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let embedding = model.encode(text)?;
        validate_embedding_dim(embedding.len(), self.config.embedding_dim)?;
        Ok(embedding)
    }

    fn checked_encode_batch(
        &self,
        model: &dyn SentenceModel,
        texts: &[&str],
    ) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let embeddings = model.encode_batch(texts)?;
        if embeddings.len() != texts.len() {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!(
                    "model returned {} embeddings for {} inputs",
                    embeddings.len(),
                    texts.len()
                ),
            });
        }
        for embedding in &embeddings {
            validate_embedding_dim(embedding.len(), self.config.embedding_dim)?;
        }
        Ok(embeddings)
    }

    fn record_degradation(&self, error: &EmbeddingError, texts: u64) {
        let total = self.degraded_calls.fetch_add(texts, Ordering::Relaxed) + texts;
        warn!(
            error = %error,
            texts,
            degraded_total = total,
            "Embedding inference failed, degraded to hash fallback"
        );
    }

    fn fallback_embedding(&self, cleaned: &str) -> Vec<f32> {
        hash_embedding(
            cleaned,
            self.config.embedding_dim,
            self.config.fallback_max_words,
        )
    }

    fn zero_vector(&self) -> Vec<f32> {
        vec![0.0; self.config.embedding_dim]
    }

    /// Current backend state.
    pub fn state(&self) -> ProviderState {
        match self.backend {
            Backend::Model(_) => ProviderState::ModelBacked,
            Backend::HashFallback { .. } => ProviderState::HashFallback,
        }
    }

    /// Returns `true` if a model is loaded.
    pub fn is_model_available(&self) -> bool {
        matches!(self.backend, Backend::Model(_))
    }

    /// Why the provider is in fallback mode, if it is.
    pub fn fallback_reason(&self) -> Option<&str> {
        match &self.backend {
            Backend::Model(_) => None,
            Backend::HashFallback { reason } => Some(reason),
        }
    }

    /// Texts that were meant for the model but were embedded by the fallback instead.
    pub fn degraded_calls(&self) -> u64 {
        self.degraded_calls.load(Ordering::Relaxed)
    }

    /// Output dimension `D`.
    pub fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }

    /// Identifier of the loaded model, or the configured one in fallback mode.
    pub fn model_id(&self) -> &str {
        match &self.backend {
            Backend::Model(model) => model.model_id(),
            Backend::HashFallback { .. } => &self.config.model_id,
        }
    }

    /// Returns the provider configuration.
    pub fn config(&self) -> &EmbeddingConfig {
        &self.config
    }
}

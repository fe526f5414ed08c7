//! Embedding + similarity utilities.
//!
//! - [`provider`] turns text into fixed-length vectors (model-backed or hash fallback).
//! - [`similarity`] compares vectors.

/// BERT sentence encoder loaded with candle.
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// Preprocessing and the hash fallback embedding.
pub mod fallback;
/// Sentence model trait.
pub mod model;
/// Embedding provider (model-backed with hash fallback).
pub mod provider;
/// Cosine similarity, top-k, similarity matrix, clustering.
pub mod similarity;
/// Tokenizer loading helpers.
pub mod utils;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use bert::BertSentenceModel;
pub use error::EmbeddingError;
pub use fallback::{hash_embedding, preprocess_text};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockBehavior, MockSentenceModel};
pub use model::SentenceModel;
pub use provider::{EmbeddingConfig, EmbeddingProvider, ProviderState};
pub use similarity::{
    cluster_by_threshold, cosine_similarity, find_most_similar, similarity_matrix,
};

//! Hybrid ranking of job seekers against job postings.
//!
//! A match score in `[0, 1]` is a weighted sum of three sub-scores:
//!
//! - lexical: two-document BM25-lite over resume and posting text ([`lexical`]);
//! - semantic: cosine similarity of sentence embeddings, rescaled to `[0, 1]` ([`embedding`]);
//! - rules: skills Jaccard, experience fit and location ([`rules`]).
//!
//! [`MatchEngine`] exposes every operation with an injected [`EmbeddingProvider`]. The
//! provider uses a BERT sentence encoder when one is configured and loads, and a
//! deterministic BLAKE3 hash embedding otherwise.
//!
//! ## Test/Mock Support
//! [`MockSentenceModel`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod embedding;
pub mod engine;
pub mod hashing;
pub mod lexical;
pub mod ranking;
pub mod rules;
pub mod scoring;

pub use config::{Config, ConfigError};
pub use constants::{DimValidationError, validate_embedding_dim};
#[cfg(any(test, feature = "mock"))]
pub use embedding::{MockBehavior, MockSentenceModel};
pub use embedding::{
    BertSentenceModel, EmbeddingConfig, EmbeddingError, EmbeddingProvider, ProviderState,
    SentenceModel, cluster_by_threshold, cosine_similarity, find_most_similar, similarity_matrix,
};
pub use engine::MatchEngine;
pub use hashing::hash_to_u64;
pub use lexical::{Bm25Params, LexicalScorer, TextDocument};
pub use ranking::{BatchRanker, CandidateProfile, JobPosting, Ranked};
pub use rules::{RuleBooster, SkillSet};
pub use scoring::{
    HybridScorer, MatchSignals, ScoreExplanation, ScoringError, ScoringInput, ScoringWeights,
};

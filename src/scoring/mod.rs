//! Hybrid combiner.
//!
//! Merges the lexical, semantic and rule sub-scores into one `[0, 1]` match score and can
//! explain how that score was reached.
//!
//! # Partial data
//!
//! A missing vector on either side makes the semantic sub-score `0.0` so the weighted sum stays
//! defined. That is not the same as "no score": callers that want to skip pairs without
//! embeddings should use [`MatchEngine::match_signals`](crate::engine::MatchEngine::match_signals),
//! which returns `None` for them.

pub mod combiner;
pub mod error;
pub mod types;


pub use combiner::HybridScorer;
pub use error::ScoringError;
pub use types::{
    ComponentScore, MatchFactors, MatchSignals, ScoreComponents, ScoreExplanation, ScoringInput,
    ScoringWeights,
};

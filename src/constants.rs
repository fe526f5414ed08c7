//! Cross-cutting, shared constants.
//!
//! The numeric values here are part of the scoring contract: changing any of them changes
//! every score this crate produces. Runtime overrides go through [`crate::config::Config`].
//!
//! # Dimension Invariants
//!
//! Every vector produced by one [`EmbeddingProvider`](crate::embedding::EmbeddingProvider)
//! has the same dimension. Vectors persisted by callers under one dimension cannot be
//! compared against vectors produced under another; use [`validate_embedding_dim`] at
//! module boundaries to catch that early.

/// Default embedding dimension (MiniLM-L6 output size).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Default sentence-embedding model identifier.
pub const DEFAULT_MODEL_ID: &str = "all-MiniLM-L6-v2";

/// Whitespace-delimited words kept before handing text to the model.
pub const MAX_EMBED_WORDS: usize = 500;

/// Words the hash fallback looks at.
pub const FALLBACK_MAX_WORDS: usize = 50;

/// Token limit of BERT-family encoders.
pub const MODEL_MAX_SEQ_LEN: usize = 512;

pub const DEFAULT_BM25_WEIGHT: f64 = 0.4;
pub const DEFAULT_SEMANTIC_WEIGHT: f64 = 0.5;
pub const DEFAULT_RULE_BOOST_WEIGHT: f64 = 0.1;

/// Allowed drift when checking that combiner weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

pub const DEFAULT_BM25_K1: f64 = 1.5;
pub const DEFAULT_BM25_B: f64 = 0.75;

/// Per-query-term scaling used to squash BM25-lite sums into `[0, 1]`.
pub const BM25_NORMALIZATION_PER_TERM: f64 = 10.0;

/// Tokens with this many characters or fewer are dropped by the lexical tokenizer.
pub const MIN_TOKEN_CHARS_EXCLUSIVE: usize = 2;

pub const SKILLS_RULE_WEIGHT: f64 = 0.6;
pub const EXPERIENCE_RULE_WEIGHT: f64 = 0.3;
pub const LOCATION_RULE_WEIGHT: f64 = 0.1;

/// Experience score when either side of the comparison is unknown.
pub const NEUTRAL_EXPERIENCE_SCORE: f64 = 0.5;
/// Surplus years that still count as a perfect experience match.
pub const EXPERIENCE_SURPLUS_GRACE_YEARS: u32 = 2;
pub const OVERQUALIFIED_PENALTY_PER_YEAR: f64 = 0.05;
pub const OVERQUALIFIED_MAX_PENALTY: f64 = 0.3;
pub const UNDERQUALIFIED_PENALTY_PER_YEAR: f64 = 0.2;
pub const UNDERQUALIFIED_MAX_PENALTY: f64 = 0.8;

pub const SAME_LOCATION_SCORE: f64 = 1.0;
pub const DIFFERENT_LOCATION_SCORE: f64 = 0.8;

/// Default similarity threshold for [`cluster_by_threshold`](crate::embedding::cluster_by_threshold).
pub const DEFAULT_CLUSTER_THRESHOLD: f64 = 0.7;

/// Error returned when dimension validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimValidationError {
    /// Embedding dimension cannot be zero.
    ZeroDimension,
    /// Two vectors (or a vector and a configuration) disagree on dimension.
    DimensionMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for DimValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "embedding dimension cannot be zero"),
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "dimension mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for DimValidationError {}

/// Validates that a runtime embedding dimension matches the expected dimension.
///
/// # Example
///
/// ```
/// use jobmatch::constants::{validate_embedding_dim, DEFAULT_EMBEDDING_DIM};
///
/// validate_embedding_dim(384, DEFAULT_EMBEDDING_DIM).unwrap();
/// assert!(validate_embedding_dim(768, DEFAULT_EMBEDDING_DIM).is_err());
/// ```
pub fn validate_embedding_dim(actual: usize, expected: usize) -> Result<(), DimValidationError> {
    if actual != expected {
        return Err(DimValidationError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

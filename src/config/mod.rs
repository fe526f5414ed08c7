//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `JOBMATCH_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::embedding::EmbeddingConfig;
use crate::lexical::Bm25Params;
use crate::scoring::ScoringWeights;

/// Engine configuration.
///
/// Use [`Config::from_env`] to read `JOBMATCH_*` overrides on top of defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Embedding model location and vector shape.
    pub embedding: EmbeddingConfig,

    /// Hybrid combiner weights. Default: `0.4 / 0.5 / 0.1`.
    pub weights: ScoringWeights,

    /// BM25-lite parameters. Default: `k1 = 1.5`, `b = 0.75`.
    pub bm25: Bm25Params,
}

impl Config {
    pub const ENV_BM25_WEIGHT: &'static str = "JOBMATCH_BM25_WEIGHT";
    pub const ENV_SEMANTIC_WEIGHT: &'static str = "JOBMATCH_SEMANTIC_WEIGHT";
    pub const ENV_RULE_BOOST_WEIGHT: &'static str = "JOBMATCH_RULE_BOOST_WEIGHT";
    pub const ENV_BM25_K1: &'static str = "JOBMATCH_BM25_K1";
    pub const ENV_BM25_B: &'static str = "JOBMATCH_BM25_B";

    /// Loads configuration from environment variables (falling back to defaults).
    ///
    /// Malformed numbers are errors rather than silently ignored: a typo in a weight would
    /// otherwise change every score without notice.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let embedding = EmbeddingConfig {
            model_path: Self::parse_optional_path_from_env(EmbeddingConfig::ENV_MODEL_PATH),
            model_id: Self::parse_string_from_env(
                EmbeddingConfig::ENV_MODEL_ID,
                defaults.embedding.model_id,
            ),
            embedding_dim: Self::parse_from_env(
                EmbeddingConfig::ENV_EMBEDDING_DIM,
                defaults.embedding.embedding_dim,
            )?,
            ..defaults.embedding
        };

        let weights = ScoringWeights {
            bm25: Self::parse_from_env(Self::ENV_BM25_WEIGHT, defaults.weights.bm25)?,
            semantic: Self::parse_from_env(Self::ENV_SEMANTIC_WEIGHT, defaults.weights.semantic)?,
            rule_boost: Self::parse_from_env(
                Self::ENV_RULE_BOOST_WEIGHT,
                defaults.weights.rule_boost,
            )?,
        };

        let bm25 = Bm25Params {
            k1: Self::parse_from_env(Self::ENV_BM25_K1, defaults.bm25.k1)?,
            b: Self::parse_from_env(Self::ENV_BM25_B, defaults.bm25.b)?,
        };

        Ok(Self {
            embedding,
            weights,
            bm25,
        })
    }

    /// Validates weights, BM25 parameters and embedding settings.
    ///
    /// A configured model path that does not exist is an error here, even though the provider
    /// itself would tolerate it by falling back. Use [`Config::validate_lenient`] to allow it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_lenient()?;

        if let Some(ref path) = self.embedding.model_path
            && !self.embedding.model_available()
        {
            return Err(if path.exists() {
                ConfigError::NotADirectory { path: path.clone() }
            } else {
                ConfigError::PathNotFound { path: path.clone() }
            });
        }

        Ok(())
    }

    /// Same as [`Config::validate`] but ignores a missing model directory.
    pub fn validate_lenient(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        self.bm25.validate()?;
        self.embedding.validate()?;
        Ok(())
    }

    fn parse_from_env<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
        match env::var(name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name, value }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(default)
    }
}

use crate::config::ConfigError;
use crate::constants::{DEFAULT_BM25_B, DEFAULT_BM25_K1};

#[derive(Debug, Clone, Copy, PartialEq)]
/// BM25 term-weight parameters.
pub struct Bm25Params {
    /// Term-frequency saturation. Default: `1.5`.
    pub k1: f64,
    /// Length normalization strength in `[0, 1]`. Default: `0.75`.
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self {
            k1: DEFAULT_BM25_K1,
            b: DEFAULT_BM25_B,
        }
    }
}

impl Bm25Params {
    pub fn new(k1: f64, b: f64) -> Self {
        Self { k1, b }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.k1.is_finite() || self.k1 < 0.0 {
            return Err(ConfigError::InvalidBm25Params {
                reason: format!("k1 must be a non-negative number, got {}", self.k1),
            });
        }
        if !(0.0..=1.0).contains(&self.b) {
            return Err(ConfigError::InvalidBm25Params {
                reason: format!("b must be between 0.0 and 1.0, got {}", self.b),
            });
        }
        Ok(())
    }
}

//! Test double for [`SentenceModel`].

use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::EmbeddingError;
use super::fallback::l2_normalize;
use super::model::SentenceModel;
use crate::hashing::hash_token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How the mock behaves on every call.
pub enum MockBehavior {
    /// Deterministic unit vectors derived from the text.
    Succeed,
    /// Every call fails with [`EmbeddingError::InferenceFailed`].
    Fail,
    /// Returns vectors one element short of the advertised dimension.
    WrongDimension,
}

/// Deterministic in-memory sentence model.
#[derive(Debug)]
pub struct MockSentenceModel {
    dim: usize,
    behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockSentenceModel {
    pub fn new(dim: usize) -> Self {
        Self::with_behavior(dim, MockBehavior::Succeed)
    }

    pub fn failing(dim: usize) -> Self {
        Self::with_behavior(dim, MockBehavior::Fail)
    }

    pub fn with_behavior(dim: usize, behavior: MockBehavior) -> Self {
        Self {
            dim,
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `encode_batch` invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn vector_for(&self, text: &str) -> Vec<f32> {
        let mut state = hash_token(text);
        let mut v: Vec<f32> = (0..self.dim)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
                ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0
            })
            .collect();
        l2_normalize(&mut v);
        v
    }
}

impl SentenceModel for MockSentenceModel {
    fn model_id(&self) -> &str {
        "mock-sentence-model"
    }

    fn dimension(&self) -> usize {
        self.dim
    }

    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        match self.behavior {
            MockBehavior::Succeed => Ok(texts.iter().map(|t| self.vector_for(t)).collect()),
            MockBehavior::Fail => Err(EmbeddingError::InferenceFailed {
                reason: "mock inference failure".to_string(),
            }),
            MockBehavior::WrongDimension => Ok(texts
                .iter()
                .map(|_| vec![0.1; self.dim.saturating_sub(1)])
                .collect()),
        }
    }
}

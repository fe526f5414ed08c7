use super::error::EmbeddingError;

/// A pretrained sentence encoder.
///
/// Implementations return one vector per input, in input order, each of length
/// [`dimension`](SentenceModel::dimension). The provider treats any `Err` (or a wrong-sized
/// vector) as an inference failure and degrades that call to the hash fallback.
pub trait SentenceModel: Send + Sync {
    /// Identifier used in logs and explanations.
    fn model_id(&self) -> &str;

    /// Output vector length.
    fn dimension(&self) -> usize;

    /// Encodes a batch of already-preprocessed, non-empty texts.
    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    /// Encodes a single text.
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.encode_batch(&[text])?
            .pop()
            .ok_or_else(|| EmbeddingError::InferenceFailed {
                reason: "model returned no embedding".to_string(),
            })
    }
}

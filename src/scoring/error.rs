use thiserror::Error;

use crate::constants::DimValidationError;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// Profile and posting vectors disagree on dimension.
    #[error("cannot compare embeddings: {0}")]
    Dimension(#[from] DimValidationError),
}

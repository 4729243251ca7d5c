use thiserror::Error;

use crate::embedding::{EmbeddingError, SentimentError};

/// Per-call scoring failure.
///
/// The pipeline turns any of these into an errored evaluation for that one
/// (query, URL) pair.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("sentiment error: {0}")]
    Sentiment(#[from] SentimentError),

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

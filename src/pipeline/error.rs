use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::embedding::{EmbeddingError, SentimentError};
use crate::fetch::FetchError;

/// Startup failure while building the validator. Fatal for the process.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load embedding model: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("failed to load sentiment classifier: {0}")]
    Sentiment(#[from] SentimentError),

    #[error("failed to build HTTP client: {0}")]
    Fetch(#[from] FetchError),
}

/// A pairs file that could not be read or parsed.
#[derive(Debug, Error)]
pub enum PairsError {
    #[error("failed to read pairs file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

//! Model loading and inference.
//!
//! - [`encoder`] turns text into unit-length sentence embeddings.
//! - [`sentiment`] assigns one discrete sentiment label to a text span.
//!
//! Both load once at startup and are read-only afterwards; consumers in
//! [`crate::scoring`] reach them through small traits so tests can swap in
//! fixed-output doubles.

/// BERT encoder and sequence-classifier wrappers.
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
/// Sentence embeddings for relevance scoring.
pub mod encoder;
mod error;
#[cfg(test)]
pub(crate) mod fixtures;
/// Sentiment classification for bias scoring.
pub mod sentiment;
/// Tokenizer/model file helpers.
pub mod utils;


pub use encoder::{ENCODER_EMBEDDING_DIM, ENCODER_MAX_SEQ_LEN, EncoderConfig, SentenceEncoder};
pub use error::EmbeddingError;
pub use sentiment::{
    SentimentClassifier, SentimentConfig, SentimentError, SentimentLabel, SentimentPrediction,
    parse_label_list,
};

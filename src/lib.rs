//! Credence library crate (used by the CLI and integration tests).
//!
//! Scores how credible a web page is as an answer to a search query:
//!
//! - [`fetch`] pulls paragraph text from the page.
//! - [`scoring`] turns it into a relevance score (embedding cosine similarity
//!   to the query) and a bias score (sentiment label of the leading text), then
//!   takes their midpoint.
//! - [`pipeline`] sequences those stages and reports per (query, URL) pair.
//!
//! ## Models
//! [`SentenceEncoder`] and [`SentimentClassifier`] load BERT-family
//! safetensors checkpoints through candle. Both fall back to deterministic
//! stubs when no model directory is configured.
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod embedding;
pub mod fetch;
pub mod pipeline;
pub mod scoring;

pub use config::{Config, ConfigError};
pub use embedding::{
    EmbeddingError, EncoderConfig, SentenceEncoder, SentimentClassifier, SentimentConfig,
    SentimentError, SentimentLabel, SentimentPrediction,
};
#[cfg(any(test, feature = "mock"))]
pub use fetch::MockPageFetcher;
pub use fetch::{FetchConfig, FetchError, HttpFetcher, PageFetcher, extract_paragraph_text};
pub use pipeline::{
    DefaultValidator, Evaluation, EvaluationRecord, LoadError, PairsError, QueryUrlPair,
    UrlValidator, parse_pairs, read_pairs,
};
#[cfg(any(test, feature = "mock"))]
pub use scoring::{FixedClassifier, FixedEmbedder};
pub use scoring::{
    BiasScorer, RelevanceScorer, ScoreComponent, ScoringError, SentimentModel, TextEmbedder,
    ValidityAggregator, ValidityReport,
};

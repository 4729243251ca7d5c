//! Cross-cutting, shared constants.
//!
//! Score buckets and limits live here so the scorers, the aggregator and the
//! tests agree on one set of numbers.
//!
//! # Score Invariants
//!
//! Every score the crate stores is an integer in `[SCORE_MIN, SCORE_MAX]`.
//! The bias buckets are chosen so that "neutral" sits exactly on the same
//! midpoint used when there is no content to classify.

pub const SCORE_MIN: u8 = 0;
pub const SCORE_MAX: u8 = 100;

/// Relevance reported when there is no content to compare against.
pub const EMPTY_CONTENT_RELEVANCE: u8 = 0;

/// Bias reported when there is no content to classify.
pub const NEUTRAL_BIAS_SCORE: u8 = 50;
pub const POSITIVE_BIAS_SCORE: u8 = 100;
pub const NEGATIVE_BIAS_SCORE: u8 = 30;

/// Leading characters of page text handed to the sentiment classifier.
pub const CLASSIFIER_MAX_CHARS: usize = 512;

pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_USER_AGENT: &str = concat!("credence/", env!("CARGO_PKG_VERSION"));

/// Embedding width of the stub encoder (matches MiniLM-class sentence models).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Token cap for BERT-family encoders and classifiers.
pub const DEFAULT_MAX_SEQ_LEN: usize = 512;

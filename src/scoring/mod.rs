//! Relevance, bias and final validity scoring.
//!
//! - [`RelevanceScorer`] embeds query and content and maps their cosine
//!   similarity onto `[0, 100]`.
//! - [`BiasScorer`] classifies the leading content and buckets the label.
//! - [`ValidityAggregator`] takes the floor midpoint of the two.
//!
//! Models are reached through the [`TextEmbedder`] and [`SentimentModel`]
//! traits so tests can swap in the doubles from [`mock`].

pub mod aggregate;
pub mod backend;
pub mod bias;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod relevance;
pub mod types;

#[cfg(test)]
mod tests;

pub use aggregate::ValidityAggregator;
pub use backend::{SentimentModel, TextEmbedder};
pub use bias::{BiasScorer, bias_for_label, leading_chars};
pub use error::ScoringError;
#[cfg(any(test, feature = "mock"))]
pub use mock::{FixedClassifier, FixedEmbedder};
pub use relevance::{RelevanceScorer, cosine_similarity};
pub use types::{ScoreComponent, ValidityReport};

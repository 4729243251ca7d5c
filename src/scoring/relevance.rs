use tracing::debug;

use super::backend::TextEmbedder;
use super::error::ScoringError;
use super::types::ScoreComponent;
use crate::constants::EMPTY_CONTENT_RELEVANCE;

/// Query/content relevance from embedding cosine similarity.
pub struct RelevanceScorer<E> {
    embedder: E,
}

impl<E: std::fmt::Debug> std::fmt::Debug for RelevanceScorer<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelevanceScorer")
            .field("embedder", &self.embedder)
            .finish()
    }
}

impl<E: TextEmbedder> RelevanceScorer<E> {
    pub fn new(embedder: E) -> Self {
        Self { embedder }
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    /// Scores how close `content` is to `query` on `[0, 100]`.
    ///
    /// Empty content scores 0 without touching the embedder.
    pub fn similarity(&self, query: &str, content: &str) -> Result<ScoreComponent, ScoringError> {
        if content.is_empty() {
            debug!("Empty content, relevance short-circuits");
            return Ok(ScoreComponent::new(EMPTY_CONTENT_RELEVANCE));
        }

        let query_vec = self.embedder.embed(query)?;
        let content_vec = self.embedder.embed(content)?;

        let cosine = cosine_similarity(&query_vec, &content_vec)?;
        let score = ScoreComponent::from_cosine(cosine);

        debug!(
            query_len = query.len(),
            content_len = content.len(),
            cosine,
            score = score.value(),
            "Relevance computed"
        );

        Ok(score)
    }
}

/// Cosine similarity of two equal-length vectors.
///
/// A zero vector on either side yields 0.0 (no direction, no similarity).
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, ScoringError> {
    if a.len() != b.len() {
        return Err(ScoringError::InvalidInput {
            reason: format!("embedding length mismatch: {} vs {}", a.len(), b.len()),
        });
    }

    let (dot, norm_a_sq, norm_b_sq) = a
        .iter()
        .zip(b.iter())
        .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
            (dot + av * bv, na + av * av, nb + bv * bv)
        });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot / (norm_a * norm_b))
    }
}

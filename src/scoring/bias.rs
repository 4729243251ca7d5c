use tracing::debug;

use super::backend::SentimentModel;
use super::error::ScoringError;
use super::types::ScoreComponent;
use crate::constants::{
    CLASSIFIER_MAX_CHARS, NEGATIVE_BIAS_SCORE, NEUTRAL_BIAS_SCORE, POSITIVE_BIAS_SCORE,
};
use crate::embedding::SentimentLabel;

/// Bias estimate from the sentiment of the page's leading text.
pub struct BiasScorer<C> {
    classifier: C,
}

impl<C: std::fmt::Debug> std::fmt::Debug for BiasScorer<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BiasScorer")
            .field("classifier", &self.classifier)
            .finish()
    }
}

impl<C: SentimentModel> BiasScorer<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Classifies the first [`CLASSIFIER_MAX_CHARS`] characters of `content`.
    ///
    /// Empty content is neutral (50) and is never sent to the classifier.
    pub fn detect_bias(&self, content: &str) -> Result<ScoreComponent, ScoringError> {
        if content.is_empty() {
            debug!("Empty content, bias defaults to neutral");
            return Ok(ScoreComponent::new(NEUTRAL_BIAS_SCORE));
        }

        let excerpt = leading_chars(content, CLASSIFIER_MAX_CHARS);
        let prediction = self.classifier.classify(excerpt)?;
        let score = bias_for_label(&prediction.label);

        debug!(
            excerpt_len = excerpt.len(),
            label = %prediction.label,
            confidence = prediction.confidence,
            score = score.value(),
            "Bias computed"
        );

        Ok(score)
    }
}

/// Total label → score mapping; unrecognised labels land in the lowest bucket.
pub fn bias_for_label(label: &SentimentLabel) -> ScoreComponent {
    let value = match label {
        SentimentLabel::Positive => POSITIVE_BIAS_SCORE,
        SentimentLabel::Neutral => NEUTRAL_BIAS_SCORE,
        SentimentLabel::Negative | SentimentLabel::Other(_) => NEGATIVE_BIAS_SCORE,
    };
    ScoreComponent::new(value)
}

/// Longest prefix of `text` holding at most `max_chars` characters.
pub fn leading_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

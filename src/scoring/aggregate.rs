use tracing::debug;

use super::types::{ScoreComponent, ValidityReport};

/// Combines relevance and bias into the final validity score.
///
/// The final score is the unweighted integer midpoint (floor), so it stays in
/// `[0, 100]` whenever both inputs do.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidityAggregator;

impl ValidityAggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn final_score(relevance: ScoreComponent, bias: ScoreComponent) -> ScoreComponent {
        let midpoint = (u16::from(relevance.value()) + u16::from(bias.value())) / 2;
        // midpoint of two values <= 100 is <= 100
        ScoreComponent::new(midpoint as u8)
    }

    /// Builds a report with no query/URL attached.
    pub fn aggregate(&self, relevance: ScoreComponent, bias: ScoreComponent) -> ValidityReport {
        let final_score = Self::final_score(relevance, bias);
        ValidityReport::new(relevance, bias, final_score, None)
    }

    /// Builds a report that records which (query, URL) pair it scores.
    pub fn aggregate_for(
        &self,
        query: &str,
        url: &str,
        relevance: ScoreComponent,
        bias: ScoreComponent,
    ) -> ValidityReport {
        let final_score = Self::final_score(relevance, bias);

        debug!(
            url = %url,
            relevance = relevance.value(),
            bias = bias.value(),
            final_score = final_score.value(),
            "Validity aggregated"
        );

        ValidityReport::new(
            relevance,
            bias,
            final_score,
            Some((query.to_string(), url.to_string())),
        )
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::constants::{SCORE_MAX, SCORE_MIN};

/// One score dimension, always within `[0, 100]`.
///
/// Construction clamps, so no code path can store an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ScoreComponent(u8);

impl ScoreComponent {
    pub const MIN: ScoreComponent = ScoreComponent(SCORE_MIN);
    pub const MAX: ScoreComponent = ScoreComponent(SCORE_MAX);

    pub fn new(value: u8) -> Self {
        Self(value.min(SCORE_MAX))
    }

    /// Maps a cosine similarity from `[-1, 1]` onto `[0, 100]`.
    ///
    /// `round((cos + 1) / 2 * 100)`, clamped. NaN maps to 0.
    pub fn from_cosine(cosine: f32) -> Self {
        if cosine.is_nan() {
            return Self::MIN;
        }

        let scaled = ((cosine + 1.0) / 2.0 * f32::from(SCORE_MAX)).round();
        // clamp before the cast so inf and |cos| > 1 stay in range
        Self(scaled.clamp(f32::from(SCORE_MIN), f32::from(SCORE_MAX)) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<ScoreComponent> for u8 {
    fn from(score: ScoreComponent) -> Self {
        score.0
    }
}

impl std::fmt::Display for ScoreComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.0, SCORE_MAX)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Relevance, bias and their midpoint for one evaluation.
///
/// Immutable: fields are private and there are no setters. A new report is
/// built for every evaluation.
pub struct ValidityReport {
    relevance: ScoreComponent,
    bias: ScoreComponent,
    #[serde(rename = "final")]
    final_score: ScoreComponent,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    evaluated_at: DateTime<Utc>,
}

impl ValidityReport {
    pub(crate) fn new(
        relevance: ScoreComponent,
        bias: ScoreComponent,
        final_score: ScoreComponent,
        source: Option<(String, String)>,
    ) -> Self {
        let (query, url) = match source {
            Some((query, url)) => (Some(query), Some(url)),
            None => (None, None),
        };

        Self {
            relevance,
            bias,
            final_score,
            query,
            url,
            evaluated_at: Utc::now(),
        }
    }

    pub fn relevance(&self) -> ScoreComponent {
        self.relevance
    }

    pub fn bias(&self) -> ScoreComponent {
        self.bias
    }

    pub fn final_score(&self) -> ScoreComponent {
        self.final_score
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn evaluated_at(&self) -> DateTime<Utc> {
        self.evaluated_at
    }

    /// The three scores as `(relevance, bias, final)` raw integers.
    pub fn scores(&self) -> (u8, u8, u8) {
        (
            self.relevance.value(),
            self.bias.value(),
            self.final_score.value(),
        )
    }
}

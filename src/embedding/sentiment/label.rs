use serde::Serialize;

/// Discrete sentiment label reported by a classifier.
///
/// Model label strings are matched case-insensitively; anything outside the
/// three known polarities is kept verbatim as [`SentimentLabel::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
    Other(String),
}

impl SentimentLabel {
    pub fn from_model_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "positive" | "pos" => SentimentLabel::Positive,
            "neutral" | "neu" => SentimentLabel::Neutral,
            "negative" | "neg" => SentimentLabel::Negative,
            _ => SentimentLabel::Other(label.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Neutral => "NEUTRAL",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Winning label plus its softmax probability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentPrediction {
    pub label: SentimentLabel,
    pub confidence: f32,
}

impl SentimentPrediction {
    pub fn new(label: SentimentLabel, confidence: f32) -> Self {
        Self { label, confidence }
    }
}

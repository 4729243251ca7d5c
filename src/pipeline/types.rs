use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::scoring::ValidityReport;

pub const RELEVANCE_FIELD: &str = "Content Relevance Score";
pub const BIAS_FIELD: &str = "Bias Score";
pub const FINAL_FIELD: &str = "Final Validity Score";
pub const ERROR_FIELD: &str = "Error";

/// Outcome of one (query, URL) evaluation: all three scores or one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    Reported(ValidityReport),
    Errored {
        query: String,
        url: String,
        message: String,
    },
}

impl Evaluation {
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::Reported(_))
    }

    pub fn report(&self) -> Option<&ValidityReport> {
        match self {
            Self::Reported(report) => Some(report),
            Self::Errored { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Reported(_) => None,
            Self::Errored { message, .. } => Some(message),
        }
    }

    pub fn query(&self) -> &str {
        match self {
            Self::Reported(report) => report.query().unwrap_or_default(),
            Self::Errored { query, .. } => query,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Reported(report) => report.url().unwrap_or_default(),
            Self::Errored { url, .. } => url,
        }
    }

    /// The output record as ordered `(field, value)` pairs.
    ///
    /// Scores render as `"<int> / 100"`; an errored evaluation has the single
    /// `Error` field.
    pub fn display_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Reported(report) => vec![
                (RELEVANCE_FIELD, report.relevance().to_string()),
                (BIAS_FIELD, report.bias().to_string()),
                (FINAL_FIELD, report.final_score().to_string()),
            ],
            Self::Errored { message, .. } => vec![(ERROR_FIELD, message.clone())],
        }
    }
}

impl From<ValidityReport> for Evaluation {
    fn from(report: ValidityReport) -> Self {
        Self::Reported(report)
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields = self.display_fields();
        for (i, (name, value)) in fields.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}

impl Serialize for Evaluation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.display_fields();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (name, value) in &fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// [`Evaluation`] with its `Query` and `URL` leading the output record.
#[derive(Debug, Serialize)]
pub struct EvaluationRecord<'a> {
    #[serde(rename = "Query")]
    pub query: &'a str,
    #[serde(rename = "URL")]
    pub url: &'a str,
    #[serde(flatten)]
    pub evaluation: &'a Evaluation,
}

impl Evaluation {
    pub fn record(&self) -> EvaluationRecord<'_> {
        EvaluationRecord {
            query: self.query(),
            url: self.url(),
            evaluation: self,
        }
    }
}

use std::path::PathBuf;

use super::error::SentimentError;
use crate::embedding::utils::ModelFiles;

pub const MAX_SEQ_LEN: usize = crate::constants::DEFAULT_MAX_SEQ_LEN;

#[derive(Debug, Clone)]
pub struct SentimentConfig {
    /// Model directory; `None` selects the lexicon stub.
    pub model_path: Option<PathBuf>,

    /// Label names by class index, overriding `id2label` from `config.json`.
    pub label_names: Option<Vec<String>>,

    pub max_seq_len: usize,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            label_names: None,
            max_seq_len: MAX_SEQ_LEN,
        }
    }
}

impl SentimentConfig {
    pub const ENV_MODEL_PATH: &'static str = "CREDENCE_CLASSIFIER_PATH";
    pub const ENV_LABELS: &'static str = "CREDENCE_CLASSIFIER_LABELS";

    pub fn new<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_path: Some(model_path.into()),
            ..Default::default()
        }
    }

    pub fn stub() -> Self {
        Self::default()
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.label_names = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn files(&self) -> Option<ModelFiles> {
        self.model_path.as_deref().map(ModelFiles::in_dir)
    }

    pub fn validate(&self) -> Result<(), SentimentError> {
        if self.max_seq_len == 0 {
            return Err(SentimentError::InvalidConfig {
                reason: "max_seq_len must be greater than zero".to_string(),
            });
        }

        if let Some(ref path) = self.model_path
            && path.as_os_str().is_empty()
        {
            return Err(SentimentError::InvalidConfig {
                reason: "model_path cannot be empty when provided".to_string(),
            });
        }

        if let Some(ref labels) = self.label_names {
            if labels.is_empty() {
                return Err(SentimentError::InvalidConfig {
                    reason: "label override list cannot be empty".to_string(),
                });
            }
            if labels.iter().any(|l| l.trim().is_empty()) {
                return Err(SentimentError::InvalidConfig {
                    reason: "label names cannot be blank".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Splits a comma-separated label list; `None` if it holds no names.
pub fn parse_label_list(value: &str) -> Option<Vec<String>> {
    let labels: Vec<String> = value
        .split(',')
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();

    if labels.is_empty() { None } else { Some(labels) }
}

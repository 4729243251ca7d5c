//! Sentiment classifier used for bias estimation.
//!
//! Wraps a BERT/RoBERTa sequence classifier and reports one discrete
//! [`SentimentLabel`] per input. Without a model directory it falls back to a
//! small polarity lexicon so the pipeline can run end to end in tests.

pub mod config;
pub mod error;
pub mod label;


pub use config::{MAX_SEQ_LEN, SentimentConfig, parse_label_list};
pub use error::SentimentError;
pub use label::{SentimentLabel, SentimentPrediction};

use std::collections::BTreeMap;

use candle_core::Tensor;
use serde::Deserialize;
use tokenizers::Tokenizer;
use tracing::{debug, info, warn};

use crate::embedding::bert::BertSequenceClassifier;
use crate::embedding::device::select_device;
use crate::embedding::utils::{ModelFiles, load_tokenizer_with_truncation, read_json};

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "positive", "benefit", "benefits", "beneficial", "improve",
    "improved", "improves", "effective", "success", "successful", "best", "love", "helpful",
    "safe", "trusted", "reliable", "happy", "win", "strong", "progress", "advance", "healthy",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "poor", "negative", "harm", "harmful", "fail", "failed", "failure",
    "worst", "hate", "dangerous", "danger", "risk", "scam", "fake", "crisis", "weak", "wrong",
    "sad", "threat", "deadly", "collapse", "fraud", "decline",
];

#[derive(Deserialize)]
struct LabelMapConfig {
    #[serde(default)]
    id2label: BTreeMap<String, String>,
}

struct LoadedModel {
    model: BertSequenceClassifier,
    tokenizer: Tokenizer,
    labels: Vec<String>,
    device: candle_core::Device,
}

pub struct SentimentClassifier {
    config: SentimentConfig,
    model: Option<LoadedModel>,
}

impl std::fmt::Debug for SentimentClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentClassifier")
            .field("config", &self.config)
            .field("model_loaded", &self.model.is_some())
            .field("labels", &self.model.as_ref().map(|m| m.labels.as_slice()))
            .finish()
    }
}

impl SentimentClassifier {
    pub fn load(config: SentimentConfig) -> Result<Self, SentimentError> {
        config.validate()?;

        let (Some(model_path), Some(files)) = (config.model_path.clone(), config.files()) else {
            warn!("No sentiment model path configured, operating in stub mode (lexicon)");
            return Ok(Self {
                config,
                model: None,
            });
        };

        if !model_path.exists() {
            return Err(SentimentError::ModelNotFound { path: model_path });
        }

        if let Some(missing) = files.first_missing() {
            return Err(SentimentError::ModelLoadFailed {
                reason: format!("Missing {}", missing.display()),
            });
        }

        let labels = resolve_labels(&config, &files)?;

        let device = select_device()?;
        debug!(?device, "Selected compute device for sentiment classifier");

        info!(
            model_path = %model_path.display(),
            labels = ?labels,
            "Loading sentiment classifier"
        );

        let model = BertSequenceClassifier::load(&files, labels.len(), &device).map_err(|e| {
            SentimentError::ModelLoadFailed {
                reason: format!("Failed to load classifier weights: {}", e),
            }
        })?;

        let tokenizer = load_tokenizer_with_truncation(&files.tokenizer, config.max_seq_len)
            .map_err(|e| SentimentError::ModelLoadFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            })?;

        info!(num_labels = labels.len(), "Sentiment classifier loaded");

        Ok(Self {
            config,
            model: Some(LoadedModel {
                model,
                tokenizer,
                labels,
                device,
            }),
        })
    }

    pub fn stub() -> Result<Self, SentimentError> {
        Self::load(SentimentConfig::stub())
    }

    pub fn is_model_loaded(&self) -> bool {
        self.model.is_some()
    }

    pub fn config(&self) -> &SentimentConfig {
        &self.config
    }

    /// Classifies `text` and returns the highest-probability label.
    pub fn classify(&self, text: &str) -> Result<SentimentPrediction, SentimentError> {
        debug!(
            text_len = text.len(),
            model_loaded = self.model.is_some(),
            "Classifying sentiment"
        );

        match &self.model {
            Some(loaded) => classify_with_model(loaded, text),
            None => Ok(classify_with_lexicon(text)),
        }
    }
}

fn classify_with_model(
    loaded: &LoadedModel,
    text: &str,
) -> Result<SentimentPrediction, SentimentError> {
    let encoding =
        loaded
            .tokenizer
            .encode(text, true)
            .map_err(|e| SentimentError::TokenizationFailed {
                reason: e.to_string(),
            })?;

    let input_ids = Tensor::new(encoding.get_ids(), &loaded.device)?.unsqueeze(0)?;
    let type_ids = Tensor::new(encoding.get_type_ids(), &loaded.device)?.unsqueeze(0)?;
    let attention_mask =
        Tensor::new(encoding.get_attention_mask(), &loaded.device)?.unsqueeze(0)?;

    let logits = loaded
        .model
        .forward(&input_ids, &type_ids, Some(&attention_mask))
        .map_err(|e| SentimentError::InferenceFailed {
            reason: e.to_string(),
        })?;

    let probs = candle_nn::ops::softmax_last_dim(&logits)?
        .squeeze(0)?
        .to_vec1::<f32>()?;

    let (index, confidence) = probs
        .iter()
        .copied()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .ok_or_else(|| SentimentError::InferenceFailed {
            reason: "classifier returned no logits".to_string(),
        })?;

    let raw_label = loaded
        .labels
        .get(index)
        .ok_or_else(|| SentimentError::InferenceFailed {
            reason: format!(
                "class index {} outside label table of {}",
                index,
                loaded.labels.len()
            ),
        })?;

    let prediction =
        SentimentPrediction::new(SentimentLabel::from_model_label(raw_label), confidence);
    debug!(label = %prediction.label, confidence, "Sentiment computed");

    Ok(prediction)
}

fn classify_with_lexicon(text: &str) -> SentimentPrediction {
    let lowered = text.to_lowercase();
    let (positive, negative) = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .fold((0usize, 0usize), |(pos, neg), word| {
            if POSITIVE_WORDS.contains(&word) {
                (pos + 1, neg)
            } else if NEGATIVE_WORDS.contains(&word) {
                (pos, neg + 1)
            } else {
                (pos, neg)
            }
        });

    let total = positive + negative;
    let prediction = if total == 0 {
        SentimentPrediction::new(SentimentLabel::Neutral, 1.0)
    } else if positive > negative {
        SentimentPrediction::new(SentimentLabel::Positive, positive as f32 / total as f32)
    } else if negative > positive {
        SentimentPrediction::new(SentimentLabel::Negative, negative as f32 / total as f32)
    } else {
        SentimentPrediction::new(SentimentLabel::Neutral, 0.5)
    };

    debug!(
        positive,
        negative,
        label = %prediction.label,
        "Sentiment computed (stub)"
    );

    prediction
}

/// Label names by class index: the configured override, else `id2label`.
fn resolve_labels(
    config: &SentimentConfig,
    files: &ModelFiles,
) -> Result<Vec<String>, SentimentError> {
    if let Some(ref labels) = config.label_names {
        return Ok(labels.clone());
    }

    let label_map: LabelMapConfig = read_json(&files.config)?;
    labels_from_id2label(&label_map.id2label)
}

fn labels_from_id2label(
    id2label: &BTreeMap<String, String>,
) -> Result<Vec<String>, SentimentError> {
    if id2label.is_empty() {
        return Err(SentimentError::InvalidConfig {
            reason: format!(
                "config.json has no id2label; set {} to name the classes",
                SentimentConfig::ENV_LABELS
            ),
        });
    }

    let mut indexed = id2label
        .iter()
        .map(|(id, label)| {
            id.parse::<usize>()
                .map(|idx| (idx, label.clone()))
                .map_err(|_| SentimentError::InvalidConfig {
                    reason: format!("id2label key '{}' is not a class index", id),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    indexed.sort_by_key(|(idx, _)| *idx);

    if indexed.iter().enumerate().any(|(pos, (idx, _))| pos != *idx) {
        return Err(SentimentError::InvalidConfig {
            reason: "id2label indices must be contiguous from 0".to_string(),
        });
    }

    Ok(indexed.into_iter().map(|(_, label)| label).collect())
}

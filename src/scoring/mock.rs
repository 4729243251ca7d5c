//! Deterministic model doubles for pipeline tests.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use super::backend::{SentimentModel, TextEmbedder};
use crate::embedding::{EmbeddingError, SentimentError, SentimentLabel, SentimentPrediction};

/// Returns pre-registered vectors; unknown text gets `default_vector`.
#[derive(Debug, Clone)]
pub struct FixedEmbedder {
    vectors: Arc<RwLock<HashMap<String, Vec<f32>>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    default_vector: Vec<f32>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FixedEmbedder {
    pub fn new(default_vector: Vec<f32>) -> Self {
        Self {
            vectors: Arc::new(RwLock::new(HashMap::new())),
            failing: Arc::new(RwLock::new(HashSet::new())),
            default_vector,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_vector(self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.write().insert(text.to_string(), vector);
        self
    }

    /// Makes `embed(text)` fail with an inference error.
    pub fn failing_on(self, text: &str) -> Self {
        self.failing.write().insert(text.to_string());
        self
    }

    /// Texts embedded so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl TextEmbedder for FixedEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.lock().push(text.to_string());

        if self.failing.read().contains(text) {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("forced failure for '{}'", text),
            });
        }

        Ok(self
            .vectors
            .read()
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.default_vector.clone()))
    }
}

/// Always predicts one label, optionally failing instead.
#[derive(Debug, Clone)]
pub struct FixedClassifier {
    label: SentimentLabel,
    fail: bool,
    inputs: Arc<Mutex<Vec<String>>>,
}

impl FixedClassifier {
    pub fn new(label: SentimentLabel) -> Self {
        Self {
            label,
            fail: false,
            inputs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(SentimentLabel::Neutral)
        }
    }

    /// Texts classified so far, in call order.
    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().clone()
    }
}

impl SentimentModel for FixedClassifier {
    fn classify(&self, text: &str) -> Result<SentimentPrediction, SentimentError> {
        self.inputs.lock().push(text.to_string());

        if self.fail {
            return Err(SentimentError::InferenceFailed {
                reason: "forced failure".to_string(),
            });
        }

        Ok(SentimentPrediction::new(self.label.clone(), 1.0))
    }
}

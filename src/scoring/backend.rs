use crate::embedding::{
    EmbeddingError, SentenceEncoder, SentimentClassifier, SentimentError, SentimentPrediction,
};

/// Text → embedding vector. Implementations must be deterministic.
pub trait TextEmbedder: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

/// Text → one sentiment label.
pub trait SentimentModel: Send + Sync {
    fn classify(&self, text: &str) -> Result<SentimentPrediction, SentimentError>;
}

impl TextEmbedder for SentenceEncoder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        SentenceEncoder::embed(self, text)
    }
}

impl SentimentModel for SentimentClassifier {
    fn classify(&self, text: &str) -> Result<SentimentPrediction, SentimentError> {
        SentimentClassifier::classify(self, text)
    }
}

impl<T: TextEmbedder + ?Sized> TextEmbedder for std::sync::Arc<T> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).embed(text)
    }
}

impl<T: SentimentModel + ?Sized> SentimentModel for std::sync::Arc<T> {
    fn classify(&self, text: &str) -> Result<SentimentPrediction, SentimentError> {
        (**self).classify(text)
    }
}

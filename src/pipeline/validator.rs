use tracing::{info, instrument, warn};

use super::error::LoadError;
use super::types::Evaluation;
use crate::config::Config;
use crate::embedding::{SentenceEncoder, SentimentClassifier};
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::scoring::{
    BiasScorer, RelevanceScorer, ScoringError, SentimentModel, TextEmbedder, ValidityAggregator,
    ValidityReport,
};

/// Validator wired to the real HTTP fetcher and candle-backed models.
pub type DefaultValidator = UrlValidator<HttpFetcher, SentenceEncoder, SentimentClassifier>;

/// Runs fetch → relevance + bias → aggregate for one (query, URL) pair.
///
/// Holds its services for its whole lifetime; every call reads them through
/// `&self`, so one validator serves any number of evaluations.
pub struct UrlValidator<F, E, C> {
    fetcher: F,
    relevance: RelevanceScorer<E>,
    bias: BiasScorer<C>,
    aggregator: ValidityAggregator,
}

impl<F, E, C> std::fmt::Debug for UrlValidator<F, E, C>
where
    F: std::fmt::Debug,
    E: std::fmt::Debug,
    C: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlValidator")
            .field("fetcher", &self.fetcher)
            .field("relevance", &self.relevance)
            .field("bias", &self.bias)
            .finish()
    }
}

impl<F, E, C> UrlValidator<F, E, C>
where
    F: PageFetcher,
    E: TextEmbedder,
    C: SentimentModel,
{
    pub fn new(fetcher: F, embedder: E, classifier: C) -> Self {
        Self {
            fetcher,
            relevance: RelevanceScorer::new(embedder),
            bias: BiasScorer::new(classifier),
            aggregator: ValidityAggregator::new(),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Evaluates one pair. Never fails: scoring errors become
    /// [`Evaluation::Errored`] carrying the error message.
    #[instrument(skip(self, query, url), fields(url = %url, query_len = query.len()))]
    pub async fn evaluate(&self, query: &str, url: &str) -> Evaluation {
        match self.try_evaluate(query, url).await {
            Ok(report) => {
                info!(
                    relevance = report.relevance().value(),
                    bias = report.bias().value(),
                    final_score = report.final_score().value(),
                    "Validity report produced"
                );
                Evaluation::Reported(report)
            }
            Err(e) => {
                warn!(error = %e, "Evaluation failed");
                Evaluation::Errored {
                    query: query.to_string(),
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        }
    }

    /// Like [`evaluate`](Self::evaluate) but returns the typed error.
    ///
    /// A failed fetch is not an error here: it yields empty content, which
    /// scores 0 relevance and neutral bias.
    pub async fn try_evaluate(
        &self,
        query: &str,
        url: &str,
    ) -> Result<ValidityReport, ScoringError> {
        let content = self.fetcher.fetch(url).await;
        self.score_content(query, url, &content)
    }

    /// Scores already-fetched content.
    pub fn score_content(
        &self,
        query: &str,
        url: &str,
        content: &str,
    ) -> Result<ValidityReport, ScoringError> {
        let relevance = self.relevance.similarity(query, content)?;
        let bias = self.bias.detect_bias(content)?;

        Ok(self.aggregator.aggregate_for(query, url, relevance, bias))
    }
}

impl DefaultValidator {
    /// Loads both models and builds the HTTP client from `config`.
    ///
    /// Any failure here is a startup error; nothing is retried.
    pub fn load(config: &Config) -> Result<Self, LoadError> {
        config.validate()?;

        let embedder = SentenceEncoder::load(config.encoder_config())?;
        let classifier = SentimentClassifier::load(config.sentiment_config())?;
        let fetcher = HttpFetcher::new(config.fetch_config())?;

        info!(
            embedder_stub = embedder.is_stub(),
            classifier_loaded = classifier.is_model_loaded(),
            timeout_secs = config.fetch_timeout.as_secs_f64(),
            "Validator ready"
        );

        Ok(Self::new(fetcher, embedder, classifier))
    }
}

//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `CREDENCE_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::embedding::{EncoderConfig, SentimentConfig, parse_label_list};
use crate::fetch::FetchConfig;

/// Runtime configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `CREDENCE_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Sentence-transformer directory. `None` selects the hashing stub.
    pub embedder_path: Option<PathBuf>,

    /// Sequence-classifier directory. `None` selects the lexicon stub.
    pub classifier_path: Option<PathBuf>,

    /// Class names by index, overriding the classifier's `id2label`.
    pub classifier_labels: Option<Vec<String>>,

    /// Page fetch timeout. Default: 10 seconds.
    pub fetch_timeout: Duration,

    /// `User-Agent` sent with every fetch. Default: `credence/<version>`.
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            embedder_path: None,
            classifier_path: None,
            classifier_labels: None,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    const ENV_EMBEDDER_PATH: &'static str = EncoderConfig::ENV_MODEL_PATH;
    const ENV_CLASSIFIER_PATH: &'static str = SentimentConfig::ENV_MODEL_PATH;
    const ENV_CLASSIFIER_LABELS: &'static str = SentimentConfig::ENV_LABELS;
    const ENV_FETCH_TIMEOUT: &'static str = FetchConfig::ENV_TIMEOUT_SECS;
    const ENV_USER_AGENT: &'static str = FetchConfig::ENV_USER_AGENT;

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let embedder_path = Self::parse_optional_path_from_env(Self::ENV_EMBEDDER_PATH);
        let classifier_path = Self::parse_optional_path_from_env(Self::ENV_CLASSIFIER_PATH);
        let classifier_labels = env::var(Self::ENV_CLASSIFIER_LABELS)
            .ok()
            .and_then(|v| parse_label_list(&v));
        let fetch_timeout = Self::parse_timeout_from_env(defaults.fetch_timeout)?;
        let user_agent = Self::parse_string_from_env(Self::ENV_USER_AGENT, defaults.user_agent);

        Ok(Self {
            embedder_path,
            classifier_path,
            classifier_labels,
            fetch_timeout,
            user_agent,
        })
    }

    /// Validates paths and basic invariants (does not create anything).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                value: "0".to_string(),
            });
        }

        for path in [&self.embedder_path, &self.classifier_path]
            .into_iter()
            .flatten()
        {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn encoder_config(&self) -> EncoderConfig {
        match self.embedder_path {
            Some(ref path) => EncoderConfig::new(path),
            None => EncoderConfig::stub(),
        }
    }

    pub fn sentiment_config(&self) -> SentimentConfig {
        let config = match self.classifier_path {
            Some(ref path) => SentimentConfig::new(path),
            None => SentimentConfig::stub(),
        };

        match self.classifier_labels {
            Some(ref labels) => config.with_labels(labels.iter().cloned()),
            None => config,
        }
    }

    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig::new(self.fetch_timeout, &self.user_agent)
    }

    fn parse_timeout_from_env(default: Duration) -> Result<Duration, ConfigError> {
        match env::var(Self::ENV_FETCH_TIMEOUT) {
            Ok(value) => {
                let secs: u64 =
                    value
                        .trim()
                        .parse()
                        .map_err(|e| ConfigError::TimeoutParseError {
                            value: value.clone(),
                            source: e,
                        })?;

                if secs == 0 {
                    return Err(ConfigError::InvalidTimeout { value });
                }

                Ok(Duration::from_secs(secs))
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(default)
    }
}

use std::time::Duration;

use super::error::FetchError;
use crate::constants::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_USER_AGENT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Whole-request deadline (connect + headers + body).
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchConfig {
    pub const ENV_TIMEOUT_SECS: &'static str = "CREDENCE_FETCH_TIMEOUT_SECS";
    pub const ENV_USER_AGENT: &'static str = "CREDENCE_USER_AGENT";

    pub fn new<S: Into<String>>(timeout: Duration, user_agent: S) -> Self {
        Self {
            timeout,
            user_agent: user_agent.into(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn validate(&self) -> Result<(), FetchError> {
        if self.timeout.is_zero() {
            return Err(FetchError::InvalidConfig {
                reason: "timeout must be greater than zero".to_string(),
            });
        }

        if self.user_agent.trim().is_empty() {
            return Err(FetchError::InvalidConfig {
                reason: "user agent cannot be blank".to_string(),
            });
        }

        Ok(())
    }
}

use thiserror::Error;

/// Why a page produced no content.
///
/// [`PageFetcher::fetch`](super::PageFetcher::fetch) flattens all of these to
/// an empty string; [`HttpFetcher::try_fetch`](super::HttpFetcher::try_fetch)
/// keeps them for callers that want the reason.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read body from {url}: {reason}")]
    Body { url: String, reason: String },

    #[error("failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },

    #[error("invalid fetch configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl FetchError {
    pub(crate) fn from_request(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else if err.is_builder() {
            FetchError::InvalidUrl {
                url: url.to_string(),
                reason: err.to_string(),
            }
        } else {
            FetchError::Transport {
                url: url.to_string(),
                reason: err.to_string(),
            }
        }
    }

    pub(crate) fn from_body(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Body {
                url: url.to_string(),
                reason: err.to_string(),
            }
        }
    }

    /// Short machine-friendly tag used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl { .. } => "invalid_url",
            FetchError::Timeout { .. } => "timeout",
            FetchError::Transport { .. } => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Body { .. } => "body",
            FetchError::ClientBuild { .. } => "client_build",
            FetchError::InvalidConfig { .. } => "invalid_config",
        }
    }
}

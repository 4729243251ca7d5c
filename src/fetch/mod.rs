//! Page retrieval: HTTP GET plus paragraph-text extraction.
//!
//! Every failure (bad URL, timeout, connection error, non-2xx status,
//! unreadable body, page without paragraphs) comes back from
//! [`PageFetcher::fetch`] as an empty string. The caller scores empty content
//! on its own path instead of aborting the evaluation.

pub mod config;
pub mod error;
pub mod extract;
#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use config::FetchConfig;
pub use error::FetchError;
pub use extract::extract_paragraph_text;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockPageFetcher;

use tracing::{debug, warn};

/// Source of page text for the pipeline.
pub trait PageFetcher: Send + Sync {
    /// Returns the page's paragraph text, or `""` if none could be obtained.
    fn fetch(&self, url: &str) -> impl std::future::Future<Output = String> + Send;
}

/// [`PageFetcher`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FetchError::ClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Like [`PageFetcher::fetch`] but keeps the failure reason.
    ///
    /// A 2xx page without paragraphs is `Ok("")`, not an error.
    pub async fn try_fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url = %url, timeout_ms = self.config.timeout.as_millis() as u64, "Fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_request(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_body(url, e))?;

        let text = extract_paragraph_text(&body);
        debug!(
            url = %url,
            body_len = body.len(),
            text_len = text.len(),
            "Extracted paragraph text"
        );

        Ok(text)
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> String {
        match self.try_fetch(url).await {
            Ok(text) => text,
            Err(e) => {
                warn!(url = %url, kind = e.kind(), error = %e, "Fetch failed, using empty content");
                String::new()
            }
        }
    }
}

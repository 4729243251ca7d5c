//! In-memory [`PageFetcher`] for tests.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use super::PageFetcher;

/// Serves canned page text by URL; unknown URLs behave like a failed fetch.
#[derive(Debug, Default, Clone)]
pub struct MockPageFetcher {
    pages: Arc<RwLock<HashMap<String, String>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, url: &str, content: &str) -> Self {
        self.insert(url, content);
        self
    }

    pub fn insert(&self, url: &str, content: &str) {
        self.pages
            .write()
            .insert(url.to_string(), content.to_string());
    }

    /// URLs requested so far, in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

impl PageFetcher for MockPageFetcher {
    async fn fetch(&self, url: &str) -> String {
        self.requests.lock().push(url.to_string());
        self.pages.read().get(url).cloned().unwrap_or_default()
    }
}

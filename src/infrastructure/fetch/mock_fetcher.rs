use async_trait::async_trait;

use crate::application::ports::{FetchError, TextFetcher};
use crate::domain::Document;

/// Canned `TextFetcher` for tests: returns the configured text for any URL.
pub struct MockTextFetcher {
    content: String,
}

impl MockTextFetcher {
    pub fn returning(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[async_trait]
impl TextFetcher for MockTextFetcher {
    async fn fetch(&self, _url: &str) -> Result<Document, FetchError> {
        Ok(Document::new(self.content.clone()))
    }
}

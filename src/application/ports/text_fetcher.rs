use async_trait::async_trait;

use crate::domain::Document;

/// Retrieves a raw plain-text document from a URL. The only port with IO;
/// everything downstream of it is a pure transform.
#[async_trait]
pub trait TextFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Document, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("request timed out after {0}s")]
    TimedOut(u64),
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{FetchError, TextFetcher};
use crate::domain::Document;

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// `TextFetcher` backed by a pooled reqwest client. One attempt per fetch;
/// the builder-level timeout bounds the whole request, and connections are
/// returned to the pool on every exit path.
pub struct HttpTextFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpTextFetcher {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self { client, timeout }
    }

    fn classify(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::TimedOut(self.timeout.as_secs())
        } else {
            FetchError::RequestFailed(error.to_string())
        }
    }
}

impl Default for HttpTextFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_TIMEOUT)
    }
}

#[async_trait]
impl TextFetcher for HttpTextFetcher {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<Document, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(|e| self.classify(e))?;

        // UTF-8 first; legacy encodings degrade to a lossy decode rather
        // than failing the whole request.
        let text = match String::from_utf8(bytes.to_vec()) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };

        tracing::debug!(url = %url, bytes = text.len(), "Fetched document");

        Ok(Document::new(text))
    }
}

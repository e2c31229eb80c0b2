use std::sync::Arc;

use crate::application::ports::{FetchError, TextFetcher};
use crate::domain::{Document, Summary, TextStatistics};
use crate::infrastructure::text_processing::{analyze, normalize, strip_boilerplate, summarize};

/// Sequences the preprocessing pipeline: fetch, strip publisher
/// boilerplate, normalize, then statistics and summary over the same
/// normalized text.
///
/// Holds only the fetcher handle and the configured summary length, so one
/// instance is shared across request tasks without locking.
pub struct PreprocessingService<F>
where
    F: TextFetcher,
{
    fetcher: Arc<F>,
    summary_sentences: usize,
}

impl<F> PreprocessingService<F>
where
    F: TextFetcher,
{
    pub fn new(fetcher: Arc<F>, summary_sentences: usize) -> Self {
        Self {
            fetcher,
            summary_sentences,
        }
    }

    pub async fn clean_from_url(&self, url: &str) -> Result<CleanedDocument, PipelineError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(PipelineError::InvalidInput(
                "url must not be empty".to_string(),
            ));
        }

        let raw = self.fetcher.fetch(url).await?;
        let body = strip_boilerplate(&raw);
        let normalized = normalize(&body);
        let statistics = analyze(&normalized);
        let summary = summarize(&normalized, self.summary_sentences);

        Ok(CleanedDocument {
            text: normalized,
            statistics,
            summary,
        })
    }

    /// Statistics over caller-supplied raw text; no fetch, no boilerplate
    /// pass.
    pub fn analyze_text(&self, text: &str) -> Result<TextStatistics, PipelineError> {
        if text.trim().is_empty() {
            return Err(PipelineError::InvalidInput(
                "text must not be empty".to_string(),
            ));
        }

        let normalized = normalize(&Document::from(text));
        Ok(analyze(&normalized))
    }
}

#[derive(Debug, Clone)]
pub struct CleanedDocument {
    pub text: Document,
    pub statistics: TextStatistics,
    pub summary: Summary,
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("processing failed: {0}")]
    Processing(String),
}

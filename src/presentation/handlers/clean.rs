use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::TextFetcher;
use crate::application::services::PipelineError;
use crate::presentation::handlers::payloads::{StatisticsPayload, bad_request, server_error};
use crate::presentation::state::AppState;

/// The response carries only the head of the cleaned text; full books run
/// to megabytes.
const PREVIEW_CHARS: usize = 500;

#[derive(Deserialize)]
pub struct CleanRequest {
    pub url: Option<String>,
}

#[derive(Serialize)]
pub struct CleanResponse {
    pub success: bool,
    pub cleaned_text: String,
    pub statistics: StatisticsPayload,
    pub summary: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn clean_handler<F>(
    State(state): State<AppState<F>>,
    payload: Result<Json<CleanRequest>, JsonRejection>,
) -> impl IntoResponse
where
    F: TextFetcher + 'static,
{
    let Ok(Json(request)) = payload else {
        return bad_request("Request body must be valid JSON.");
    };

    let Some(url) = request.url else {
        tracing::warn!("Clean request without 'url' field");
        return bad_request("Missing 'url' field in request.");
    };

    let url = url.trim().to_string();
    if !url.to_lowercase().ends_with(".txt") {
        tracing::warn!(url = %url, "Rejected non-text URL");
        return bad_request("URL must point to a .txt file (e.g., Project Gutenberg).");
    }

    tracing::debug!(url = %url, "Cleaning document from URL");

    match state.preprocessing_service.clean_from_url(&url).await {
        Ok(cleaned) => {
            tracing::info!(
                url = %url,
                word_count = cleaned.statistics.word_count,
                sentence_count = cleaned.statistics.sentence_count,
                summary_sentences = cleaned.summary.len(),
                "Document cleaned"
            );

            let preview: String = cleaned.text.as_str().chars().take(PREVIEW_CHARS).collect();

            (
                StatusCode::OK,
                Json(CleanResponse {
                    success: true,
                    cleaned_text: preview,
                    statistics: StatisticsPayload::from(&cleaned.statistics),
                    summary: cleaned.summary.to_text(),
                }),
            )
                .into_response()
        }
        Err(e @ PipelineError::InvalidInput(_)) => {
            tracing::warn!(error = %e, "Rejected clean request");
            bad_request(e.to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "Clean pipeline failed");
            server_error(format!("Server error: {}", e))
        }
    }
}

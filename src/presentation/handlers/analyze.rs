use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::TextFetcher;
use crate::application::services::PipelineError;
use crate::infrastructure::observability::log_excerpt;
use crate::presentation::handlers::payloads::{StatisticsPayload, bad_request, server_error};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub text: Option<String>,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub statistics: StatisticsPayload,
}

#[tracing::instrument(skip(state, payload))]
pub async fn analyze_handler<F>(
    State(state): State<AppState<F>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> impl IntoResponse
where
    F: TextFetcher + 'static,
{
    let Ok(Json(request)) = payload else {
        return bad_request("Request body must be valid JSON.");
    };

    let Some(text) = request.text else {
        tracing::warn!("Analyze request without 'text' field");
        return bad_request("Missing 'text' field in request.");
    };

    if text.trim().is_empty() {
        tracing::warn!("Analyze request with empty text");
        return bad_request("Provided text is empty.");
    }

    tracing::debug!(text = %log_excerpt(&text), "Analyzing raw text");

    match state.preprocessing_service.analyze_text(&text) {
        Ok(statistics) => {
            tracing::info!(
                word_count = statistics.word_count,
                sentence_count = statistics.sentence_count,
                "Text analyzed"
            );

            (
                StatusCode::OK,
                Json(AnalyzeResponse {
                    success: true,
                    statistics: StatisticsPayload::from(&statistics),
                }),
            )
                .into_response()
        }
        Err(e @ PipelineError::InvalidInput(_)) => {
            tracing::warn!(error = %e, "Rejected analyze request");
            bad_request(e.to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "Analyze pipeline failed");
            server_error(format!("Server error: {}", e))
        }
    }
}

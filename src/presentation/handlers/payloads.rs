use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::TextStatistics;

#[derive(Serialize)]
pub struct StatisticsPayload {
    pub word_count: usize,
    pub sentence_count: usize,
    pub unique_word_count: usize,
    pub average_word_length: f64,
    pub average_sentence_length: f64,
    pub vocabulary_richness: f64,
}

impl From<&TextStatistics> for StatisticsPayload {
    fn from(stats: &TextStatistics) -> Self {
        Self {
            word_count: stats.word_count,
            sentence_count: stats.sentence_count,
            unique_word_count: stats.unique_word_count,
            average_word_length: stats.average_word_length,
            average_sentence_length: stats.average_sentence_length,
            vocabulary_richness: stats.vocabulary_richness,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

pub fn bad_request(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
}

pub fn server_error(message: impl Into<String>) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(message)),
    )
        .into_response()
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::scores::repository::ScoreRepository;
use crate::text::TextSource;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub score_repository: Arc<dyn ScoreRepository + Send + Sync>,
    pub text_source: Arc<dyn TextSource + Send + Sync>,
}

impl AppState {
    pub fn new(
        score_repository: Arc<dyn ScoreRepository + Send + Sync>,
        text_source: Arc<dyn TextSource + Send + Sync>,
    ) -> Self {
        Self {
            score_repository,
            text_source,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid value for {field}: {value}")]
    InvalidMetric { field: &'static str, value: String },

    #[error("storage error: {0}")]
    Storage(String),

    #[error("Internal server error")]
    Internal,
}

impl AppError {
    /// Shorthand for range/non-empty violations, naming the offending field.
    pub fn invalid_metric(field: &'static str, value: impl ToString) -> Self {
        AppError::InvalidMetric {
            field,
            value: value.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidMetric { field, value } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": format!("invalid value for {}: {}", field, value),
                    "field": field,
                })),
            ),
            AppError::Storage(detail) => {
                // Storage internals stay in the logs, not in the response body
                tracing::warn!(error = %detail, "Storage operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "storage unavailable" })),
                )
            }
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            ),
        };

        (status, body).into_response()
    }
}

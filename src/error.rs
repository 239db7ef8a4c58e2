use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Fetch failed: {0}")]
    FetchFailed(String),
    #[error("Submission failed")]
    SubmissionFailed,
    #[error("Internal server error")]
    Internal,
    #[error("Internal server error: {0}")]
    InternalWithMsg(String),
}

impl AppError {
    /// Read operations call this at the service boundary so a store outage
    /// is reported as a retryable failure, never as a missing record.
    pub fn into_fetch_failed(self) -> Self {
        match self {
            AppError::Database(e) => AppError::FetchFailed(e.to_string()),
            other => other,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(e) => {
                error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::FetchFailed(msg) => {
                error!("Fetch failed: {}", msg);
                (StatusCode::BAD_GATEWAY, "Could not reach the data store. Please try again.".to_string())
            }
            AppError::SubmissionFailed => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Submission failed. Please try again later.".to_string(),
            ),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string()),
            AppError::InternalWithMsg(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

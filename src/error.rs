use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::entries::validation::ValidationError;

/// Error returned by every handler. Renders `{"error": .., "code": ..}`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Secret is malformed or was never issued. Both look the same outside.
    #[error("User not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Body is not JSON or does not fit the request shape.
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    #[error("storage error: {0:#}")]
    Storage(#[source] anyhow::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
            AppError::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                e.to_string(),
            ),
            AppError::InvalidBody(rejection) => {
                (rejection.status(), "VALIDATION_ERROR", rejection.body_text())
            }
            AppError::Storage(e) => {
                tracing::error!(error = %format!("{e:#}"), "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message, "code": code }))).into_response()
    }
}

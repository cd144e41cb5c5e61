//! Application Error Types
//!
//! Centralized error handling with Axum integration. This is the only place
//! where errors are mapped to HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// Field-level validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let reason = status.canonical_reason().map(str::to_string);

        let body = match self {
            AppError::NotFound(message) | AppError::BadRequest(message) => ErrorResponse {
                message,
                error: reason,
                errors: None,
            },
            AppError::Validation(errors) => ErrorResponse {
                message: "Validation failed".into(),
                error: None,
                errors: Some(errors),
            },
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                internal_error_body(reason)
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                internal_error_body(reason)
            }
        };

        (status, Json(body)).into_response()
    }
}

fn internal_error_body(reason: Option<String>) -> ErrorResponse {
    ErrorResponse {
        message: "Internal server error".into(),
        error: reason,
        errors: None,
    }
}

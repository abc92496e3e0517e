//! Application error type mapping to HTTP status codes and the `{error}` body.
//!
//! Status mapping separates client faults from server faults: validation is
//! 400, a missing bot is 404, authorization failure is 401, and storage
//! trouble is 500. The body shape is always `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use chatforge_types::error::BotError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Domain errors from the services.
    Bot(BotError),
    /// Request-shape validation error caught at the handler boundary.
    Validation(String),
    /// Generic internal error.
    Internal(String),
}

impl From<BotError> for AppError {
    fn from(e: BotError) -> Self {
        AppError::Bot(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Bot(BotError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg),
            AppError::Bot(BotError::NotFound) => {
                (StatusCode::NOT_FOUND, "bot not found".to_string())
            }
            AppError::Bot(BotError::Unauthorized(msg)) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Bot(BotError::Storage(msg)) => {
                tracing::error!(error = %msg, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fieldgate_core::error::ValidationError;
use serde_json::json;

/// Message returned when the request body is not a JSON object.
pub const INVALID_JSON_MESSAGE: &str = "invalid JSON format";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`ValidationError`] for rule failures and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce `{"error": ...}` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required field failed its rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request body could not be decoded as a JSON object.
    #[error("invalid JSON format")]
    InvalidJson,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::InvalidJson => (StatusCode::BAD_REQUEST, INVALID_JSON_MESSAGE.to_string()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

//! Request body extractor for arbitrary JSON objects.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use serde_json::{Map, Value};

use crate::error::AppError;

/// The request body decoded as a JSON object.
///
/// The `Content-Type` must start with `application/json` (case-insensitive,
/// parameters such as `charset` allowed). Unlike [`axum::Json`], every
/// failure (wrong or missing content type, unreadable body, malformed JSON,
/// non-object JSON) rejects with [`AppError::InvalidJson`]. A literal `null`
/// body yields an empty object.
#[derive(Debug, Clone, Default)]
pub struct JsonObject(pub Map<String, Value>);

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.to_ascii_lowercase().starts_with("application/json"))
}

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            tracing::debug!(
                content_type = ?req.headers().get(CONTENT_TYPE),
                "Request body is not declared as JSON",
            );
            return Err(AppError::InvalidJson);
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|err| {
            tracing::debug!(error = %err, "Failed to read request body");
            AppError::InvalidJson
        })?;

        let object: Option<Map<String, Value>> = serde_json::from_slice(&bytes).map_err(|err| {
            tracing::debug!(error = %err, "Request body is not a JSON object");
            AppError::InvalidJson
        })?;

        Ok(JsonObject(object.unwrap_or_default()))
    }
}

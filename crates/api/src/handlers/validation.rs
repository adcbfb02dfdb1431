//! Handler for the root validation endpoint.

use axum::extract::State;
use axum::Json;
use fieldgate_core::validation::validate as validate_fields;
use serde_json::{Map, Value};

use crate::error::AppResult;
use crate::extract::JsonObject;
use crate::state::AppState;

/// POST /
///
/// Validate the body against the configured rule set and return the
/// accepted fields. Fails with 400 on the first required-field violation.
pub async fn validate(
    State(state): State<AppState>,
    JsonObject(input): JsonObject,
) -> AppResult<Json<Map<String, Value>>> {
    let validated = validate_fields(&input, &state.rules).inspect_err(|err| {
        tracing::warn!(field = err.field(), error = %err, "Validation error");
    })?;

    tracing::info!(
        received = input.len(),
        accepted = validated.len(),
        fields = ?validated.keys().collect::<Vec<_>>(),
        "Validated JSON",
    );

    Ok(Json(validated))
}

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the route tree.
///
/// ```text
/// POST /    validate the body against the configured rule set
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new().route("/", post(handlers::validation::validate))
}

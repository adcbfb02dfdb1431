use std::sync::Arc;

use fieldgate_core::validation::ValidationRule;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the rule set is shared read-only across requests.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Rules applied to every `POST /` body, in order.
    pub rules: Arc<[ValidationRule]>,
}

impl AppState {
    pub fn new(config: ServerConfig, rules: Vec<ValidationRule>) -> Self {
        Self {
            config: Arc::new(config),
            rules: rules.into(),
        }
    }
}

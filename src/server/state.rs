use std::sync::Arc;

use crate::server::config::ServerConfig;
use crate::validator::Validator;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; the validator and its rule set are shared read-only by
/// every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub validator: Arc<Validator>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(validator: Validator, config: ServerConfig) -> Self {
        Self {
            validator: Arc::new(validator),
            config: Arc::new(config),
        }
    }
}

pub mod health;
pub mod password;

use axum::Router;

use crate::server::state::AppState;

/// All service routes, mounted at the root.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(password::router())
}

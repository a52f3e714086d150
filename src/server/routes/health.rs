use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::server::state::AppState;

pub const SERVICE_NAME: &str = "Password Validator Microservice";

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET / -- reports the service as online. Does not touch the validator.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: SERVICE_NAME,
        status: "online",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::post};
use serde::Serialize;
use serde_json::Value;

use crate::server::error::AppError;
use crate::server::state::AppState;
use crate::validator::Verdict;

pub const VALIDATE_PATH: &str = "/validar-senha";

/// Request body field holding the candidate password.
pub const PASSWORD_FIELD: &str = "senha";

pub const CONFIRMATION: &str = "password valid";

/// Wire form of a [`Verdict`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResponse {
    #[serde(rename = "valida")]
    pub valid: bool,
    #[serde(rename = "erros")]
    pub errors: Vec<String>,
    /// Present only when the password is valid.
    #[serde(rename = "confirmacao", skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<&'static str>,
}

impl From<Verdict> for ValidationResponse {
    fn from(verdict: Verdict) -> Self {
        let confirmation = verdict.valid.then_some(CONFIRMATION);
        Self {
            valid: verdict.valid,
            errors: verdict.errors,
            confirmation,
        }
    }
}

/// POST /validar-senha -- validates `senha` against the rule set.
///
/// A missing or non-string field is answered with 400; any evaluated
/// password, valid or not, with 200.
async fn validate(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return AppError::from(rejection).render(state.config.expose_error_details());
        }
    };

    // `body` keeps the plaintext until the handler returns; it is not zeroized.
    match state.validator.evaluate_field(body.get(PASSWORD_FIELD)) {
        Err(err) => {
            tracing::info!(reason = %err, "Password field rejected");
            let response = ValidationResponse::from(Verdict::rejected(err));
            (StatusCode::BAD_REQUEST, Json(response)).into_response()
        }
        Ok(verdict) => {
            tracing::info!(
                valid = verdict.valid,
                errors = ?verdict.errors,
                "Password validated"
            );

            (StatusCode::OK, Json(ValidationResponse::from(verdict))).into_response()
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route(VALIDATE_PATH, post(validate))
}

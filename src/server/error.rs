use std::any::Any;
use std::error::Error as _;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

const INTERNAL_MESSAGE: &str = "internal server error";

/// Faults raised while handling a request.
///
/// Rendered as `{ "message": ... }` with the fault's own status code, plus
/// a `stack` field with the error chain when details may be exposed.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body could not be read as JSON.
    #[error("malformed request body")]
    MalformedBody(#[from] JsonRejection),

    /// A handler panicked; the payload message is kept for diagnostics.
    #[error("handler panicked: {0}")]
    Panic(String),
}

impl AppError {
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        Self::Panic(message)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedBody(rejection) => rejection.status(),
            AppError::Panic(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Internal faults never leak their detail here.
    pub fn message(&self) -> String {
        match self {
            AppError::MalformedBody(rejection) => rejection.body_text(),
            AppError::Panic(_) => INTERNAL_MESSAGE.to_string(),
        }
    }

    /// The error followed by each of its sources, one per line.
    ///
    /// Wrappers that display the same text as their source appear once.
    pub fn chain(&self) -> String {
        let mut out = self.to_string();
        let mut last = out.clone();
        let mut source = self.source();
        while let Some(err) = source {
            let text = err.to_string();
            if text != last {
                out.push_str("\n    caused by: ");
                out.push_str(&text);
                last = text;
            }
            source = err.source();
        }
        out
    }

    pub fn render(self, expose_details: bool) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.chain(), "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let mut body = json!({ "message": self.message() });
        if expose_details {
            body["stack"] = json!(self.chain());
        }

        (status, Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.render(false)
    }
}

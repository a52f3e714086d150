//! Application router builder.
//!
//! Shared by the binary and the integration tests so both run the same
//! middleware stack.

use std::any::Any;

use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use axum::response::Response;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::server::error::AppError;
use crate::server::routes;
use crate::server::state::AppState;

/// Hardening headers added to every response that does not already set them.
pub const SECURITY_HEADERS: &[(&str, &str)] = &[
    ("content-security-policy", "default-src 'self'"),
    ("referrer-policy", "no-referrer"),
    ("strict-transport-security", "max-age=15552000; includeSubDomains"),
    ("x-content-type-options", "nosniff"),
    ("x-dns-prefetch-control", "off"),
    ("x-download-options", "noopen"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-permitted-cross-domain-policies", "none"),
];

/// Build the full application [`Router`] with all middleware layers.
///
/// Layers, innermost first:
///
/// 1. Panic recovery (JSON 500)
/// 2. Security headers
/// 3. Structured request/response tracing
/// 4. CORS (any origin)
pub fn build_app_router(state: AppState) -> Router {
    let expose_details = state.config.expose_error_details();

    let mut router = routes::router().layer(CatchPanicLayer::custom(panic_handler(expose_details)));

    for &(name, value) in SECURITY_HEADERS {
        router = router.layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        ));
    }

    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn panic_handler(
    expose_details: bool,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone {
    move |payload| AppError::from_panic(payload).render(expose_details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn explode() -> &'static str {
        panic!("validator exploded")
    }

    async fn panic_response(expose_details: bool) -> (StatusCode, serde_json::Value) {
        let app: Router = Router::new()
            .route("/explode", get(explode))
            .layer(CatchPanicLayer::custom(panic_handler(expose_details)));

        let response = app
            .oneshot(Request::get("/explode").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_panic_rendered_as_json_500() {
        let (status, json) = panic_response(false).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["message"], "internal server error");
        assert!(json.get("stack").is_none());
    }

    #[tokio::test]
    async fn test_panic_details_outside_production() {
        let (status, json) = panic_response(true).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["stack"].as_str().unwrap().contains("validator exploded"));
    }

    #[test]
    fn test_security_headers_are_valid() {
        for &(name, value) in SECURITY_HEADERS {
            assert!(HeaderName::from_bytes(name.as_bytes()).is_ok(), "{name}");
            assert!(HeaderValue::from_str(value).is_ok(), "{value}");
        }
    }
}

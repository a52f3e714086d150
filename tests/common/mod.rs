#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header::CONTENT_TYPE};
use http_body_util::BodyExt;
use tower::ServiceExt;

use pwd_policy::server::config::Environment;
use pwd_policy::server::{AppState, ServerConfig, build_app_router};
use pwd_policy::{RuleSet, Validator};

/// Build the application router exactly as the binary does.
pub fn build_test_app(environment: Environment) -> Router {
    let config = ServerConfig {
        environment,
        ..ServerConfig::default()
    };
    build_app_router(AppState::new(Validator::new(RuleSet::standard()), config))
}

pub fn test_app() -> Router {
    build_test_app(Environment::Development)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// POST a raw body with a JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, &body.to_string()).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

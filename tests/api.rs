//! Integration tests for the four informational endpoints.
//!
//! These drive the router in-process via `tower::ServiceExt::oneshot`, so no
//! socket is bound and no environment variables are touched; configuration is
//! injected directly to avoid cross-test races on the process environment.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

use pipeline_demo::api::{create_router, AppState};
use pipeline_demo::config::Config;

fn default_app() -> Router {
    create_router(AppState::default())
}

async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_reports_status_message_version_environment() {
    let response = get(default_app(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert!(body["message"].is_string());
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["environment"], "production");
}

#[tokio::test]
async fn health_reports_uptime_and_version() {
    let response = get(default_app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], "1.0.0");

    let uptime = body["uptime_seconds"].as_f64().unwrap();
    assert!(uptime >= 0.0);
}

#[tokio::test]
async fn health_uptime_is_non_decreasing() {
    let app = default_app();

    let first = body_json(get(app.clone(), "/health").await).await;
    tokio::time::sleep(std::time::Duration::from_millis(30)).await;
    let second = body_json(get(app, "/health").await).await;

    let first_uptime = first["uptime_seconds"].as_f64().unwrap();
    let second_uptime = second["uptime_seconds"].as_f64().unwrap();
    assert!(
        second_uptime >= first_uptime,
        "uptime went backwards: {first_uptime} -> {second_uptime}"
    );
}

#[tokio::test]
async fn ready_always_reports_ready() {
    let app = default_app();

    for _ in 0..3 {
        let response = get(app.clone(), "/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({"status": "ready"}));
    }
}

#[tokio::test]
async fn info_reports_pipeline_metadata() {
    let response = get(default_app(), "/info").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["project"], "Zero-Downtime CI/CD Pipeline");
    assert_eq!(body["author"], "Akif");
    assert_eq!(body["deployment_strategy"], "Blue/Green");

    let stack = body["stack"].as_array().unwrap();
    assert_eq!(stack[0], "Rust");

    let stages = body["pipeline_stages"].as_array().unwrap();
    assert_eq!(stages.len(), 5);
    assert_eq!(stages[0], "Lint");
}

#[tokio::test]
async fn root_and_health_agree_on_configured_version() {
    let state = AppState::new(Config {
        app_version: "2.3.1".to_string(),
        environment: "staging".to_string(),
        ..Config::default()
    });
    let app = create_router(state);

    let root = body_json(get(app.clone(), "/").await).await;
    let health = body_json(get(app, "/health").await).await;

    assert_eq!(root["version"], "2.3.1");
    assert_eq!(health["version"], "2.3.1");
    assert_eq!(root["environment"], "staging");
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(default_app(), "/metrics").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

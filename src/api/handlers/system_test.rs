//! Integration tests for the health endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::api::{AppState, CorsPolicy, HealthInfo, check, routes};
use crate::contact::ContactIntake;
use crate::telemetry::{TelemetryConfig, TelemetryGenerator};

fn test_app(health: HealthInfo) -> axum::Router {
    let state = AppState::new(
        TelemetryGenerator::new(TelemetryConfig::default()).unwrap(),
        ContactIntake::default(),
        health,
    );
    let cors = CorsPolicy::default().to_layer().unwrap();
    routes::create_router(state, Some(cors), false)
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[test]
fn check_always_reports_alive() {
    let response = check(&HealthInfo::default());
    assert_eq!(response.status, "alive");
    assert_eq!(response.engine, "rust");
    assert_eq!(response.version.as_deref(), Some(env!("CARGO_PKG_VERSION")));
}

#[test]
fn check_uses_configured_engine() {
    let response = check(&HealthInfo {
        engine: "golang".to_string(),
        version: None,
    });
    assert_eq!(response.status, "alive");
    assert_eq!(response.engine, "golang");
    assert!(response.version.is_none());
}

#[tokio::test]
async fn health_returns_alive() {
    let app = test_app(HealthInfo::default());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let body = json_body(response).await;
    assert_eq!(body["status"], "alive");
    assert_eq!(body["engine"], "rust");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn health_omits_version_when_unset() {
    let app = test_app(HealthInfo {
        engine: "rust".to_string(),
        version: None,
    });

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = json_body(response).await;
    assert_eq!(body["status"], "alive");
    assert!(body.get("version").is_none());
}

#[tokio::test]
async fn health_ignores_request_body_and_query() {
    let app = test_app(HealthInfo::default());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health?verbose=true")
                .body(Body::from("ignored"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "alive");
}

#[tokio::test]
async fn health_rejects_post() {
    let app = test_app(HealthInfo::default());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

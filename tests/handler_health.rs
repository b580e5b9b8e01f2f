mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use shorturl::api::handlers::health_handler;
use shorturl::domain::entities::UrlMapping;
use shorturl::domain::repositories::{MappingRepository, StoreError};
use shorturl::state::AppState;

/// Store whose every operation fails, as if the database were unreachable.
struct UnavailableRepository;

#[async_trait]
impl MappingRepository for UnavailableRepository {
    async fn find_by_original_url(&self, _: &str) -> Result<Option<UrlMapping>, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }

    async fn find_by_short_code(&self, _: i64) -> Result<Option<UrlMapping>, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }

    async fn list(&self, _: i64, _: i64) -> Result<Vec<UrlMapping>, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }

    async fn create_next(&self, _: &str) -> Result<UrlMapping, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }
}

fn health_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = health_server(common::create_test_state());

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let server = health_server(common::create_test_state_with(Arc::new(
        UnavailableRepository,
    )));

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["storage"]["status"], "error");
}

#[tokio::test]
async fn test_storage_failures_use_fixed_messages() {
    let server = common::api_server(common::create_test_state_with(Arc::new(
        UnavailableRepository,
    )));

    let response = server
        .post("/api/shorturl")
        .json(&serde_json::json!({ "url": "https://example.com/a" }))
        .await;
    response.assert_status_ok();
    response.assert_json(&serde_json::json!({ "error": "Error saving URL" }));

    let response = server.get("/api/shorturl/1").await;
    response.assert_status_ok();
    response.assert_json(&serde_json::json!({ "error": "Error retrieving URL" }));
}

#![allow(dead_code)]

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum_test::TestServer;
use shorturl::api::routes::api_routes;
use shorturl::application::services::{RetryPolicy, UrlRegistry, UrlValidator};
use shorturl::domain::repositories::MappingRepository;
use shorturl::infrastructure::dns::{HostResolver, StaticResolver};
use shorturl::infrastructure::persistence::MemoryMappingRepository;
use shorturl::state::AppState;

pub const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Resolver that knows a handful of test hosts and nothing else.
pub fn test_resolver() -> StaticResolver {
    StaticResolver::new()
        .with_host("example.com", [LOCALHOST])
        .with_host("www.example.com", [LOCALHOST])
        .with_host("example.org", [LOCALHOST])
}

/// Application state backed by an in-memory store and [`test_resolver`].
pub fn create_test_state() -> AppState {
    create_test_state_with(Arc::new(MemoryMappingRepository::new()))
}

pub fn create_test_state_with(repository: Arc<dyn MappingRepository>) -> AppState {
    let resolver: Arc<dyn HostResolver> = Arc::new(test_resolver());
    let validator = Arc::new(UrlValidator::new(resolver, Duration::from_secs(1)));
    let registry = Arc::new(UrlRegistry::new(repository, RetryPolicy::default()));

    AppState::new(validator, registry)
}

/// Test server exposing the `/api` routes.
pub fn api_server(state: AppState) -> TestServer {
    let app = Router::new().nest("/api", api_routes()).with_state(state);

    TestServer::new(app).unwrap()
}

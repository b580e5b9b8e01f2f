//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                        - Landing page
//! - `GET  /health`                  - Health check
//! - `GET  /api/hello`               - Greeting
//! - `POST /api/shorturl`            - Register a URL
//! - `GET  /api/shorturl/{short_url}` - Redirect
//! - `/public/*`                     - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, for browser clients on other origins
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::config::StaticAssets;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `assets` - landing page and static directory locations
pub fn app_router(state: AppState, assets: &StaticAssets) -> NormalizePath<Router> {
    let router = Router::new()
        .route_service("/", ServeFile::new(&assets.index_file))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .nest_service("/public", ServeDir::new(&assets.public_dir))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

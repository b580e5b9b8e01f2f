//! Cross-origin resource sharing middleware.

use tower_http::cors::CorsLayer;

/// Creates a CORS layer allowing any origin, method, and header.
///
/// The API is meant to be called from arbitrary browser front ends, so every
/// route answers preflight requests and carries permissive CORS headers.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}

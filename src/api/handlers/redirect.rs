//! Handler for short code redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::error::{AppError, LOOKUP_FAILED};
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// Responds with `302 Found` and the stored URL, byte-for-byte, in `Location`.
///
/// # Errors
///
/// Errors are answered with `200 OK` and a JSON body:
///
/// - `{"error": "No short URL found for the given input"}` when the code
///   is unknown or not a non-negative integer
/// - `{"error": "Error retrieving URL"}` on storage failures
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let mapping = state
        .registry
        .resolve(&short_url)
        .await
        .map_err(|e| AppError::from_registry(e, LOOKUP_FAILED))?;

    let location = HeaderValue::try_from(mapping.original_url.as_str()).map_err(|e| {
        error!(short_code = mapping.short_code, error = %e, "Stored url is not a valid header value");
        AppError::Internal(LOOKUP_FAILED)
    })?;

    debug!(short_code = mapping.short_code, "Redirecting");
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

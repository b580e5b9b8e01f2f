//! Handler for the registration endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::JsonOrForm;
use crate::error::{AppError, SAVE_FAILED};
use crate::state::AppState;

/// Registers a URL and returns its short code.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// Form (`url=https://example.com/a`) or JSON:
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com/a", "short_url": 1 }
/// ```
///
/// Submitting the same URL again returns the same `short_url`.
///
/// # Errors
///
/// Errors are answered with `200 OK` and a JSON body:
///
/// - `{"error": "invalid url"}` for missing, malformed, non-HTTP(S), or
///   unresolvable URLs
/// - `{"error": "Error saving URL"}` on storage failures
pub async fn shorten_handler(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;
    let Some(candidate) = payload.url else {
        return Err(AppError::InvalidUrl);
    };

    let url = state.validator.validate(&candidate).await?;

    let mapping = state
        .registry
        .register(url)
        .await
        .map_err(|e| AppError::from_registry(e, SAVE_FAILED))?;

    Ok(Json(mapping.into()))
}

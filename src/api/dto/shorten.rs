//! DTOs for the registration endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlMapping;

/// Request to shorten a URL.
///
/// Arrives either as an HTML form post (`url=...`) or as JSON (`{"url": "..."}`).
/// Format and host checks happen in [`crate::application::services::UrlValidator`];
/// this only rejects a missing or empty field.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(required(message = "url is required"), length(min = 1, message = "url is empty"))]
    pub url: Option<String>,
}

/// Successful registration.
///
/// `short_url` is the integer code, not a full URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<UrlMapping> for ShortenResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            original_url: mapping.original_url,
            short_url: mapping.short_code,
        }
    }
}

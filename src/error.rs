//! HTTP-facing error type.
//!
//! Every failure is rendered as `{ "error": "<message>" }`. The messages are
//! part of the public contract: clients match on them.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, error};
use validator::ValidationErrors;

use crate::application::services::{RegistryError, UrlValidationError};

/// Message returned when registering a mapping fails in storage.
pub const SAVE_FAILED: &str = "Error saving URL";

/// Message returned when looking up a mapping fails in storage.
pub const LOOKUP_FAILED: &str = "Error retrieving URL";

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Submitted URL is malformed, not HTTP(S), or its host does not resolve.
    #[error("invalid url")]
    InvalidUrl,

    #[error("No short URL found for the given input")]
    NotFound,

    #[error("{0}")]
    Internal(&'static str),
}

impl AppError {
    /// Maps a registry failure, using `storage_message` for storage errors.
    pub fn from_registry(err: RegistryError, storage_message: &'static str) -> Self {
        match err {
            RegistryError::NotFound => Self::NotFound,
            RegistryError::Storage(e) => {
                error!(error = %e, "{storage_message}");
                Self::Internal(storage_message)
            }
        }
    }

    /// Every error is answered with `200 OK`; clients tell failures apart by
    /// the `error` field alone.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl | AppError::NotFound | AppError::Internal(_) => StatusCode::OK,
        }
    }
}

impl From<UrlValidationError> for AppError {
    fn from(err: UrlValidationError) -> Self {
        debug!(reason = %err, "Rejected url");
        AppError::InvalidUrl
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        debug!(reason = %err, "Rejected request payload");
        AppError::InvalidUrl
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        (self.status(), Json(ErrorBody { error: &message })).into_response()
    }
}

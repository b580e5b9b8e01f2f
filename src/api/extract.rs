//! Request body extractor accepting JSON or URL-encoded forms.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::AppError;

/// Deserializes the body as JSON when the content type says so, and as an
/// `application/x-www-form-urlencoded` form otherwise.
///
/// Any rejection becomes [`AppError::InvalidUrl`]: the only body this service
/// reads is the registration payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        if is_json {
            let Json(payload) = Json::<T>::from_request(req, state).await.map_err(|e| {
                debug!(error = %e, "Rejected JSON body");
                AppError::InvalidUrl
            })?;
            return Ok(Self(payload));
        }

        let Form(payload) = Form::<T>::from_request(req, state).await.map_err(|e| {
            debug!(error = %e, "Rejected form body");
            AppError::InvalidUrl
        })?;
        Ok(Self(payload))
    }
}

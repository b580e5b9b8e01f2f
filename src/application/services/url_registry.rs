//! Registration and resolution of url mappings.

use std::sync::Arc;
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, error, info, warn};

use crate::domain::entities::{UrlMapping, ValidatedUrl};
use crate::domain::repositories::{MappingRepository, StoreError};
use crate::utils::short_code::parse_short_code;

/// Errors returned by [`UrlRegistry`].
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("no short URL found for the given input")]
    NotFound,

    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Bounded backoff applied when code assignment hits a `short_code` conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of retries after the first attempt.
    pub max_retries: usize,
    /// Base of the exponential backoff, in milliseconds.
    pub base_delay_ms: u64,
    /// Upper bound for a single delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            base_delay_ms: 10,
            max_delay: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    fn strategy(&self) -> impl Iterator<Item = Duration> + use<> {
        ExponentialBackoff::from_millis(self.base_delay_ms)
            .max_delay(self.max_delay)
            .map(jitter)
            .take(self.max_retries)
    }
}

/// Authoritative mapping between original URLs and short codes.
///
/// # Registration
///
/// 1. Return the existing mapping for the exact same URL, if any
/// 2. Otherwise ask the store to atomically assign `count + 1` and insert
/// 3. Retry (bounded, with jittered backoff) when the code is already taken
/// 4. When the URL itself is taken, a concurrent registration of the same URL
///    committed first; return its mapping
///
/// Every lookup is a fresh read against the store.
pub struct UrlRegistry<R: ?Sized> {
    repository: Arc<R>,
    retry: RetryPolicy,
}

impl<R: MappingRepository + ?Sized> UrlRegistry<R> {
    /// Creates a new registry.
    pub fn new(repository: Arc<R>, retry: RetryPolicy) -> Self {
        Self { repository, retry }
    }

    /// Registers `url`, returning the existing mapping when it is already known.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Storage`] if the store fails or code conflicts
    /// persist after the configured retries.
    pub async fn register(&self, url: ValidatedUrl) -> Result<UrlMapping, RegistryError> {
        if let Some(existing) = self.repository.find_by_original_url(url.as_str()).await? {
            debug!(short_code = existing.short_code, "Url already registered");
            return Ok(existing);
        }

        let created = RetryIf::start(
            self.retry.strategy(),
            || self.repository.create_next(url.as_str()),
            |e: &StoreError| {
                let retry = e.is_short_code_conflict();
                if retry {
                    warn!(error = %e, "Short code conflict, retrying");
                }
                retry
            },
        )
        .await;

        match created {
            Ok(mapping) => {
                info!(
                    short_code = mapping.short_code,
                    original_url = %mapping.original_url,
                    "Registered url"
                );
                Ok(mapping)
            }
            Err(StoreError::UrlTaken) => {
                debug!("Url registered concurrently, returning existing mapping");
                self.repository
                    .find_by_original_url(url.as_str())
                    .await?
                    .ok_or_else(|| {
                        StoreError::Backend("mapping missing after url conflict".to_string())
                            .into()
                    })
            }
            Err(e) => {
                error!(error = %e, "Failed to register url");
                Err(e.into())
            }
        }
    }

    /// Resolves a raw short code path segment.
    ///
    /// Segments that are not non-negative integers resolve to
    /// [`RegistryError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no mapping matches.
    /// Returns [`RegistryError::Storage`] on store failures.
    pub async fn resolve(&self, raw_code: &str) -> Result<UrlMapping, RegistryError> {
        let Some(short_code) = parse_short_code(raw_code) else {
            debug!(raw_code, "Short code is not a non-negative integer");
            return Err(RegistryError::NotFound);
        };

        self.resolve_code(short_code).await
    }

    /// Resolves a numeric short code.
    ///
    /// # Errors
    ///
    /// See [`Self::resolve`].
    pub async fn resolve_code(&self, short_code: i64) -> Result<UrlMapping, RegistryError> {
        self.repository
            .find_by_short_code(short_code)
            .await?
            .ok_or(RegistryError::NotFound)
    }

    /// Returns the number of registered mappings.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Storage`] on store failures.
    pub async fn count(&self) -> Result<i64, RegistryError> {
        Ok(self.repository.count().await?)
    }

    /// Lists mappings ordered by short code.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Storage`] on store failures.
    pub async fn list(&self, page: i64, page_size: i64) -> Result<Vec<UrlMapping>, RegistryError> {
        Ok(self.repository.list(page, page_size).await?)
    }
}

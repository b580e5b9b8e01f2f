//! Repository trait for url mapping storage.

use crate::domain::entities::UrlMapping;
use async_trait::async_trait;

/// Errors surfaced by a mapping store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The unique constraint on `short_code` rejected the insert.
    #[error("short code {0} is already taken")]
    ShortCodeTaken(i64),

    /// The unique constraint on `original_url` rejected the insert.
    #[error("url is already registered")]
    UrlTaken,

    /// The backend could not complete the operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Returns true for conflicts that a fresh code assignment can resolve.
    pub fn is_short_code_conflict(&self) -> bool {
        matches!(self, Self::ShortCodeTaken(_))
    }
}

/// Durable store of url mappings.
///
/// Reads are plain lookups and may run concurrently with writers.
/// [`MappingRepository::create_next`] is the single write path and must be
/// atomic with respect to other calls to it on the same store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryMappingRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Finds the mapping whose original URL equals `original_url` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage failures.
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlMapping>, StoreError>;

    /// Finds the mapping with the given short code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage failures.
    async fn find_by_short_code(&self, short_code: i64) -> Result<Option<UrlMapping>, StoreError>;

    /// Counts all mappings.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage failures.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Lists mappings ordered by short code.
    ///
    /// # Arguments
    ///
    /// - `page` - Page number (1-indexed)
    /// - `page_size` - Number of items per page
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on storage failures.
    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<UrlMapping>, StoreError>;

    /// Atomically assigns `count + 1` as the short code of a new mapping for
    /// `original_url` and persists it.
    ///
    /// No concurrent `create_next` on the same store may observe the same count.
    ///
    /// # Errors
    ///
    /// - [`StoreError::UrlTaken`] if a mapping for `original_url` already exists
    /// - [`StoreError::ShortCodeTaken`] if the computed code is already in use
    /// - [`StoreError::Backend`] on storage failures
    async fn create_next(&self, original_url: &str) -> Result<UrlMapping, StoreError>;
}

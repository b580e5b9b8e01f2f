//! Url mapping entity: the association between an original URL and its short code.

use chrono::{DateTime, Utc};

/// A committed mapping between an original URL and its integer short code.
///
/// Mappings are created exactly once by [`crate::application::services::UrlRegistry`]
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub short_code: i64,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(short_code: i64, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_code,
            original_url,
            created_at,
        }
    }
}

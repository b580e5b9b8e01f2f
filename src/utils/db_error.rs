//! Mapping of SQLx errors onto [`StoreError`].

use crate::domain::repositories::StoreError;

/// Name of the unique constraint on `url_mappings.short_code`.
pub const SHORT_CODE_CONSTRAINT: &str = "url_mappings_short_code_key";

/// Name of the unique constraint on `url_mappings.original_url`.
pub const ORIGINAL_URL_CONSTRAINT: &str = "url_mappings_original_url_key";

/// Classifies an error raised while inserting `short_code`.
///
/// Unique violations are told apart by constraint name so the registry can
/// retry code conflicts and dedup url conflicts. Everything else is a backend
/// failure.
pub fn classify_insert_error(e: sqlx::Error, short_code: i64) -> StoreError {
    if let Some(db_err) = e.as_database_error()
        && db_err.is_unique_violation()
    {
        match db_err.constraint() {
            Some(SHORT_CODE_CONSTRAINT) => return StoreError::ShortCodeTaken(short_code),
            Some(ORIGINAL_URL_CONSTRAINT) => return StoreError::UrlTaken,
            _ => {}
        }
    }

    backend_error(e)
}

/// Wraps any SQLx error as [`StoreError::Backend`].
pub fn backend_error(e: sqlx::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{MappingRepository, StoreError};
use crate::utils::db_error::{backend_error, classify_insert_error};

#[derive(sqlx::FromRow)]
struct MappingRow {
    short_code: i64,
    original_url: String,
    created_at: DateTime<Utc>,
}

impl From<MappingRow> for UrlMapping {
    fn from(row: MappingRow) -> Self {
        UrlMapping::new(row.short_code, row.original_url, row.created_at)
    }
}

/// PostgreSQL repository for url mappings.
///
/// Both `short_code` and `original_url` carry unique constraints. Code
/// assignment runs inside a transaction holding a `SHARE ROW EXCLUSIVE` lock on
/// `url_mappings`: the lock conflicts with itself, so concurrent writers queue
/// up, while plain `SELECT`s (`ACCESS SHARE`) keep running.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlMapping>, StoreError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT short_code, original_url, created_at
            FROM url_mappings
            WHERE original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(backend_error)?;

        Ok(row.map(UrlMapping::from))
    }

    async fn find_by_short_code(&self, short_code: i64) -> Result<Option<UrlMapping>, StoreError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT short_code, original_url, created_at
            FROM url_mappings
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(backend_error)?;

        Ok(row.map(UrlMapping::from))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(backend_error)
    }

    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<UrlMapping>, StoreError> {
        let offset = (page.max(1) - 1).saturating_mul(page_size);

        let rows = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT short_code, original_url, created_at
            FROM url_mappings
            ORDER BY short_code
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page_size)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(backend_error)?;

        Ok(rows.into_iter().map(UrlMapping::from).collect())
    }

    async fn create_next(&self, original_url: &str) -> Result<UrlMapping, StoreError> {
        let mut tx = self.pool.begin().await.map_err(backend_error)?;

        sqlx::query("LOCK TABLE url_mappings IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await
            .map_err(backend_error)?;

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(&mut *tx)
            .await
            .map_err(backend_error)?;
        let short_code = count + 1;

        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            INSERT INTO url_mappings (short_code, original_url)
            VALUES ($1, $2)
            RETURNING short_code, original_url, created_at
            "#,
        )
        .bind(short_code)
        .bind(original_url)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| classify_insert_error(e, short_code))?;

        tx.commit().await.map_err(backend_error)?;
        debug!(short_code, "Inserted url mapping");

        Ok(row.into())
    }
}

//! In-process implementation of the mapping repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{MappingRepository, StoreError};

#[derive(Debug, Default)]
struct Tables {
    by_code: BTreeMap<i64, UrlMapping>,
    by_url: HashMap<String, i64>,
}

/// Mapping store held in process memory.
///
/// Lookups share a read lock; [`MappingRepository::create_next`] takes the
/// write lock for the whole count-assign-insert sequence, which serializes
/// writers without a global lock around anything else.
///
/// Contents are lost on restart. Intended for development and tests.
#[derive(Debug, Default)]
pub struct MemoryMappingRepository {
    tables: RwLock<Tables>,
}

impl MemoryMappingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MappingRepository for MemoryMappingRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlMapping>, StoreError> {
        let tables = self.tables.read().await;

        Ok(tables
            .by_url
            .get(original_url)
            .and_then(|code| tables.by_code.get(code))
            .cloned())
    }

    async fn find_by_short_code(&self, short_code: i64) -> Result<Option<UrlMapping>, StoreError> {
        Ok(self.tables.read().await.by_code.get(&short_code).cloned())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let len = self.tables.read().await.by_code.len();
        i64::try_from(len).map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<UrlMapping>, StoreError> {
        let page_size = usize::try_from(page_size).unwrap_or(0);
        let offset = usize::try_from(page.max(1) - 1)
            .unwrap_or(0)
            .saturating_mul(page_size);

        Ok(self
            .tables
            .read()
            .await
            .by_code
            .values()
            .skip(offset)
            .take(page_size)
            .cloned()
            .collect())
    }

    async fn create_next(&self, original_url: &str) -> Result<UrlMapping, StoreError> {
        let mut tables = self.tables.write().await;

        if tables.by_url.contains_key(original_url) {
            return Err(StoreError::UrlTaken);
        }

        let count = i64::try_from(tables.by_code.len())
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        let short_code = count + 1;
        if tables.by_code.contains_key(&short_code) {
            return Err(StoreError::ShortCodeTaken(short_code));
        }

        let mapping = UrlMapping::new(short_code, original_url.to_string(), Utc::now());
        tables.by_url.insert(original_url.to_string(), short_code);
        tables.by_code.insert(short_code, mapping.clone());

        Ok(mapping)
    }
}

//! Test doubles for the store and cache seams.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::cache::{CacheStats, QueryCache};
use crate::catalog::{Catalog, Item, ItemStore, SharedCatalog};
use crate::error::{CacheError, CacheResult, StoreError, StoreResult};

/// Red Shoes (1), Blue Shoes (2), Red Hat (3).
pub(crate) fn sample_store() -> SharedCatalog {
    let mut catalog = Catalog::new();
    catalog.insert("Red Shoes", "Bright red running shoes").unwrap();
    catalog.insert("Blue Shoes", "Navy canvas shoes").unwrap();
    catalog.insert("Red Hat", "Wool beanie").unwrap();
    SharedCatalog::new(catalog)
}

/// Delegates to a real catalog and counts calls.
pub(crate) struct CountingStore {
    inner: SharedCatalog,
    searches: AtomicUsize,
}

impl CountingStore {
    pub(crate) fn new(inner: SharedCatalog) -> Self {
        Self {
            inner,
            searches: AtomicUsize::new(0),
        }
    }

    pub(crate) fn searches(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemStore for CountingStore {
    async fn search(&self, substring: &str) -> StoreResult<Vec<Item>> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        self.inner.search(substring).await
    }

    async fn search_limited(&self, substring: &str, limit: usize) -> StoreResult<Vec<Item>> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        self.inner.search_limited(substring, limit).await
    }
}

/// Every call fails with a backend error.
pub(crate) struct FailingStore;

#[async_trait]
impl ItemStore for FailingStore {
    async fn search(&self, _substring: &str) -> StoreResult<Vec<Item>> {
        Err(StoreError::Backend("connection reset".to_string()))
    }

    async fn search_limited(&self, _substring: &str, _limit: usize) -> StoreResult<Vec<Item>> {
        Err(StoreError::Backend("connection reset".to_string()))
    }
}

/// A cache whose backend is down.
pub(crate) struct UnavailableCache;

#[async_trait]
impl QueryCache for UnavailableCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Err(CacheError::Unavailable("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: String, _ttl: Duration) -> CacheResult<()> {
        Err(CacheError::Unavailable("connection refused".to_string()))
    }

    async fn stats(&self) -> CacheStats {
        CacheStats::default()
    }
}

//! Query Cache Layer
//!
//! The `QueryCache` seam used by the search resolver, and its in-process
//! implementation over a shared `CacheStore`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheStats, CacheStore};
use crate::error::CacheResult;

// == Query Cache Trait ==
/// Key-value cache for encoded search results.
///
/// Each call is individually atomic. An `Err` means the backend was
/// unreachable; callers treat it as a miss.
#[async_trait]
pub trait QueryCache: Send + Sync {
    /// Returns the payload stored under `key`, or `None` if absent or expired.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key` for `ttl`, replacing any existing entry.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()>;

    /// Current counters for the stats endpoint.
    async fn stats(&self) -> CacheStats;
}

// == Shared Cache ==
/// Process-wide `CacheStore` behind an async lock.
#[derive(Debug, Clone, Default)]
pub struct SharedCache {
    inner: Arc<RwLock<CacheStore>>,
}

impl SharedCache {
    /// Wraps a cache store for shared access.
    pub fn new(store: CacheStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Underlying store handle, used by the cleanup task.
    pub fn handle(&self) -> Arc<RwLock<CacheStore>> {
        Arc::clone(&self.inner)
    }
}

#[async_trait]
impl QueryCache for SharedCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        // Write lock: reads update stats and may drop an expired entry
        Ok(self.inner.write().await.get(key))
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()> {
        self.inner.write().await.set(key.to_string(), value, ttl);
        Ok(())
    }

    async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }
}

//! Search Resolver
//!
//! Validate, look up the cache, fall back to the catalog on a miss, and
//! write non-empty results back.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, warn};

use crate::cache::{codec, QueryCache};
use crate::catalog::{ItemProjection, ItemStore};
use crate::error::ValidationError;
use crate::models::SearchParams;

// == Search Outcome ==
/// Terminal state of one search request.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Matching items, from the cache or a fresh catalog read
    Ok(Vec<ItemProjection>),
    /// Input rejected before any lookup
    BadRequest(ValidationError),
    /// The catalog has no matching item
    NotFound,
    /// The catalog failed
    InternalError(String),
}

// == Search Resolver ==
/// Read-through cached search over an item store.
#[derive(Clone)]
pub struct SearchResolver {
    store: Arc<dyn ItemStore>,
    cache: Arc<dyn QueryCache>,
    ttl: Duration,
}

impl SearchResolver {
    /// Creates a resolver writing cache entries with the given TTL.
    pub fn new(store: Arc<dyn ItemStore>, cache: Arc<dyn QueryCache>, ttl: Duration) -> Self {
        Self { store, cache, ttl }
    }

    /// Resolves one search request.
    ///
    /// Empty result sets are never cached, and a store failure leaves the
    /// cache untouched.
    pub async fn resolve(&self, params: &SearchParams) -> SearchOutcome {
        let query = match params.validate() {
            Ok(query) => query,
            Err(err) => return SearchOutcome::BadRequest(err),
        };

        if let Some(results) = self.lookup(&query).await {
            debug!(query = %query, count = results.len(), "search cache hit");
            return SearchOutcome::Ok(results);
        }
        debug!(query = %query, "search cache miss");

        let items = match self.store.search(&query).await {
            Ok(items) => items,
            Err(err) => {
                error!(query = %query, error = %err, "catalog search failed");
                return SearchOutcome::InternalError(err.to_string());
            }
        };

        if items.is_empty() {
            return SearchOutcome::NotFound;
        }

        let results: Vec<ItemProjection> = items.iter().map(ItemProjection::from).collect();
        self.populate(&query, &results).await;

        SearchOutcome::Ok(results)
    }

    /// Cached results for `query`. Outages and bad payloads read as a miss.
    async fn lookup(&self, query: &str) -> Option<Vec<ItemProjection>> {
        let payload = match self.cache.get(query).await {
            Ok(payload) => payload?,
            Err(err) => {
                warn!(query = %query, error = %err, "cache read failed, using catalog");
                return None;
            }
        };

        match codec::decode(&payload) {
            Ok(results) => Some(results),
            Err(err) => {
                warn!(query = %query, error = %err, "discarding undecodable cache entry");
                None
            }
        }
    }

    /// Writes `results` to the cache. Failures are logged and dropped.
    async fn populate(&self, query: &str, results: &[ItemProjection]) {
        let payload = match codec::encode(results) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(query = %query, error = %err, "could not encode results for cache");
                return;
            }
        };

        if let Err(err) = self.cache.set(query, payload, self.ttl).await {
            warn!(query = %query, error = %err, "cache write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::SharedCache;
    use crate::resolver::fakes::{
        sample_store, CountingStore, FailingStore, UnavailableCache,
    };
    use std::thread::sleep;

    const TTL: Duration = Duration::from_secs(300);

    fn resolver(store: Arc<dyn ItemStore>, cache: SharedCache) -> SearchResolver {
        SearchResolver::new(store, Arc::new(cache), TTL)
    }

    fn ids(outcome: &SearchOutcome) -> Vec<u64> {
        match outcome {
            SearchOutcome::Ok(results) => results.iter().map(|r| r.id).collect(),
            other => panic!("expected Ok outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_miss_then_hit() {
        let store = Arc::new(CountingStore::new(sample_store()));
        let cache = SharedCache::default();
        let resolver = resolver(store.clone(), cache.clone());

        let first = resolver.resolve(&SearchParams::new("shoes")).await;
        assert_eq!(ids(&first), vec![1, 2]);
        assert_eq!(store.searches(), 1);
        assert!(cache.get("shoes").await.unwrap().is_some());

        let second = resolver.resolve(&SearchParams::new("shoes")).await;
        assert_eq!(second, first);
        assert_eq!(store.searches(), 1, "cache hit must not consult the store");
    }

    #[tokio::test]
    async fn test_cache_key_is_trimmed_query() {
        let store = Arc::new(CountingStore::new(sample_store()));
        let cache = SharedCache::default();
        let resolver = resolver(store.clone(), cache.clone());

        resolver.resolve(&SearchParams::new("  shoes ")).await;
        resolver.resolve(&SearchParams::new("shoes")).await;

        assert!(cache.get("shoes").await.unwrap().is_some());
        assert_eq!(store.searches(), 1);
    }

    #[tokio::test]
    async fn test_no_results_is_not_cached() {
        let store = Arc::new(CountingStore::new(sample_store()));
        let cache = SharedCache::default();
        let resolver = resolver(store.clone(), cache.clone());

        assert_eq!(
            resolver.resolve(&SearchParams::new("boots")).await,
            SearchOutcome::NotFound
        );
        assert!(cache.get("boots").await.unwrap().is_none());

        resolver.resolve(&SearchParams::new("boots")).await;
        assert_eq!(store.searches(), 2);
        assert_eq!(cache.stats().await.writes, 0);
    }

    #[tokio::test]
    async fn test_invalid_input_touches_nothing() {
        let store = Arc::new(CountingStore::new(sample_store()));
        let cache = SharedCache::default();
        let resolver = resolver(store.clone(), cache.clone());

        let missing = resolver.resolve(&SearchParams::default()).await;
        assert_eq!(missing, SearchOutcome::BadRequest(ValidationError::Missing("query")));

        let empty = resolver.resolve(&SearchParams::new("   ")).await;
        assert_eq!(empty, SearchOutcome::BadRequest(ValidationError::Empty("query")));

        assert_eq!(store.searches(), 0);
        let stats = cache.stats().await;
        assert_eq!(stats.hits + stats.misses + stats.writes, 0);
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_error() {
        let cache = SharedCache::default();
        let resolver = resolver(Arc::new(FailingStore), cache.clone());

        let outcome = resolver.resolve(&SearchParams::new("shoes")).await;
        assert_eq!(
            outcome,
            SearchOutcome::InternalError("Storage backend failure: connection reset".to_string())
        );
        assert_eq!(cache.stats().await.writes, 0);
        assert!(cache.handle().read().await.is_empty());
    }

    #[tokio::test]
    async fn test_unavailable_cache_degrades_to_store() {
        let store = Arc::new(CountingStore::new(sample_store()));
        let resolver = SearchResolver::new(store.clone(), Arc::new(UnavailableCache), TTL);

        let first = resolver.resolve(&SearchParams::new("red")).await;
        let second = resolver.resolve(&SearchParams::new("red")).await;

        assert_eq!(ids(&first), vec![1, 3]);
        assert_eq!(second, first);
        assert_eq!(store.searches(), 2);
    }

    #[tokio::test]
    async fn test_undecodable_entry_is_a_miss() {
        let store = Arc::new(CountingStore::new(sample_store()));
        let cache = SharedCache::default();
        cache
            .set("shoes", "[{'id': 99}]".to_string(), TTL)
            .await
            .unwrap();
        let resolver = resolver(store.clone(), cache.clone());

        let outcome = resolver.resolve(&SearchParams::new("shoes")).await;
        assert_eq!(ids(&outcome), vec![1, 2]);
        assert_eq!(store.searches(), 1);

        // Overwritten with a well-formed payload
        let payload = cache.get("shoes").await.unwrap().unwrap();
        assert_eq!(codec::decode(&payload).unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_cached_results_fall_through_to_store() {
        let store = Arc::new(CountingStore::new(sample_store()));
        let cache = SharedCache::default();
        cache
            .set("boots", r#"{"v":1,"results":[]}"#.to_string(), TTL)
            .await
            .unwrap();
        let resolver = resolver(store.clone(), cache.clone());

        let outcome = resolver.resolve(&SearchParams::new("boots")).await;
        assert_eq!(outcome, SearchOutcome::NotFound);
        assert_eq!(store.searches(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_reads_fresh_store_data() {
        let catalog = sample_store();
        let store = Arc::new(CountingStore::new(catalog.clone()));
        let cache = SharedCache::default();
        let resolver = SearchResolver::new(store.clone(), Arc::new(cache), Duration::from_secs(1));

        assert_eq!(ids(&resolver.resolve(&SearchParams::new("shoes")).await), vec![1, 2]);
        catalog.insert("Green Shoes", "Grass green").await.unwrap();

        // Still served from cache
        assert_eq!(ids(&resolver.resolve(&SearchParams::new("shoes")).await), vec![1, 2]);
        assert_eq!(store.searches(), 1);

        sleep(Duration::from_millis(1100));

        assert_eq!(
            ids(&resolver.resolve(&SearchParams::new("shoes")).await),
            vec![1, 2, 4]
        );
        assert_eq!(store.searches(), 2);
    }
}

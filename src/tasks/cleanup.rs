//! Expired Entry Sweep
//!
//! Background task that periodically drops expired query cache entries.
//! Reads already ignore expired entries; the sweep only reclaims memory for
//! keys nobody asks for again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the sweep loop over `cache`, running every `cleanup_interval_secs`.
///
/// The returned handle is aborted on shutdown.
///
/// # Example
/// ```ignore
/// let cache = SharedCache::default();
/// let cleanup_handle = spawn_cleanup_task(cache.handle(), 1);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<CacheStore>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    // A zero interval would spin
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting query cache sweep with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("Query cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Query cache sweep: no expired entries found");
            }
        }
    })
}

//! Cache Module
//!
//! Query result caching with a fixed TTL, and the codec for cached payloads.

pub mod codec;
mod entry;
mod layer;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use layer::{QueryCache, SharedCache};
pub use stats::CacheStats;
pub use store::CacheStore;

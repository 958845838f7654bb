//! Cache Entry Module
//!
//! A single cached payload and its expiry deadline.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A cached payload with an absolute expiry on the monotonic clock.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The encoded payload
    pub value: String,
    /// Expiry instant, `None` when the TTL overflows the clock
    pub expires_at: Option<Instant>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry that expires `ttl` from now.
    pub fn new(value: String, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now().checked_add(ttl),
        }
    }

    // == Is Expired ==
    /// An entry is expired once the current time reaches `expires_at`.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Expiry check against an explicit clock reading.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }
}

//! Cached Payload Codec
//!
//! Result sets are stored as a versioned JSON envelope:
//!
//! ```json
//! {"v":1,"results":[{"id":1,"title":"Red Shoes","description":"..."}]}
//! ```
//!
//! Decoding is plain deserialization into typed records. Anything that does
//! not match the envelope shape is rejected, and so is an empty result set:
//! only searches that matched something are ever cached.

use serde::{Deserialize, Serialize};

use crate::catalog::ItemProjection;
use crate::error::{CacheError, CacheResult};

/// Envelope version written by `encode`.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    v: u32,
    results: &'a [ItemProjection],
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Envelope {
    v: u32,
    results: Vec<ItemProjection>,
}

/// Encodes an ordered, non-empty result set for storage in the cache.
pub fn encode(results: &[ItemProjection]) -> CacheResult<String> {
    if results.is_empty() {
        return Err(CacheError::EmptyResults);
    }

    let envelope = EnvelopeRef {
        v: FORMAT_VERSION,
        results,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Decodes a cached payload back into its ordered result set.
pub fn decode(payload: &str) -> CacheResult<Vec<ItemProjection>> {
    let envelope: Envelope = serde_json::from_str(payload)?;

    if envelope.v != FORMAT_VERSION {
        return Err(CacheError::UnsupportedVersion(envelope.v));
    }
    if envelope.results.is_empty() {
        return Err(CacheError::EmptyResults);
    }

    Ok(envelope.results)
}

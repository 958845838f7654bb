//! Resolver Module
//!
//! Request orchestration between validation, the query cache, and the catalog.
//!
//! # Resolvers
//! - `SearchResolver`: read-through cached search, one `SearchOutcome` per request
//! - `AutocompleteResolver`: uncached, limited title suggestions

mod autocomplete;
mod search;

#[cfg(test)]
pub(crate) mod fakes;

pub use autocomplete::{AutocompleteResolver, DEFAULT_SUGGESTION_LIMIT};
pub use search::{SearchOutcome, SearchResolver};

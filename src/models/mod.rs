//! Request and Response models for the search API
//!
//! Query-string DTOs with their validation, and the JSON bodies returned by
//! each endpoint.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{AutocompleteParams, QueryPairs, SearchParams};
pub use responses::{
    ErrorResponse, HealthResponse, InvalidInputResponse, NotFoundResponse, SearchResponse,
    StatsResponse, SuggestionsResponse,
};

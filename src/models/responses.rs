//! Response DTOs for the search API
//!
//! Defines the structure of outgoing HTTP response bodies and how a search
//! outcome maps onto status codes.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::cache::CacheStats;
use crate::catalog::ItemProjection;
use crate::resolver::SearchOutcome;

/// Message returned when a search matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No results found for your query.";

/// Body of a successful search (200).
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub results: Vec<ItemProjection>,
}

/// Body of a search that matched nothing (404).
#[derive(Debug, Clone, Serialize)]
pub struct NotFoundResponse {
    pub message: String,
}

impl NotFoundResponse {
    pub fn new() -> Self {
        Self {
            message: NO_RESULTS_MESSAGE.to_string(),
        }
    }
}

impl Default for NotFoundResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Body of a rejected search request (400).
#[derive(Debug, Clone, Serialize)]
pub struct InvalidInputResponse {
    /// Always "Invalid input"
    pub error: String,
    /// Field name to validation messages
    pub details: BTreeMap<String, Vec<String>>,
}

impl InvalidInputResponse {
    pub fn new(details: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            error: "Invalid input".to_string(),
            details,
        }
    }
}

/// Body of `GET /autocomplete`.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of result sets written to the cache
    pub writes: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            writes: stats.writes,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for internal failures (500)
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for SearchOutcome {
    fn into_response(self) -> Response {
        match self {
            SearchOutcome::Ok(results) => {
                (StatusCode::OK, Json(SearchResponse { results })).into_response()
            }
            SearchOutcome::BadRequest(err) => (
                StatusCode::BAD_REQUEST,
                Json(InvalidInputResponse::new(err.details())),
            )
                .into_response(),
            SearchOutcome::NotFound => {
                (StatusCode::NOT_FOUND, Json(NotFoundResponse::new())).into_response()
            }
            SearchOutcome::InternalError(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(message)),
            )
                .into_response(),
        }
    }
}

//! API Handlers
//!
//! HTTP request handlers for each search service endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::warn;

use crate::cache::QueryCache;
use crate::catalog::ItemStore;
use crate::config::Config;
use crate::error::StoreError;
use crate::models::{
    AutocompleteParams, HealthResponse, QueryPairs, SearchParams, StatsResponse,
    SuggestionsResponse,
};
use crate::resolver::{AutocompleteResolver, SearchOutcome, SearchResolver};

/// Application state shared across all handlers.
///
/// The store and cache are injected, so tests can swap in fakes.
#[derive(Clone)]
pub struct AppState {
    pub search: SearchResolver,
    pub autocomplete: AutocompleteResolver,
    /// Query cache, kept for the stats endpoint
    pub cache: Arc<dyn QueryCache>,
}

impl AppState {
    /// Wires both resolvers over the given store and cache.
    pub fn new(store: Arc<dyn ItemStore>, cache: Arc<dyn QueryCache>, config: &Config) -> Self {
        Self {
            search: SearchResolver::new(Arc::clone(&store), Arc::clone(&cache), config.cache_ttl()),
            autocomplete: AutocompleteResolver::new(store, config.autocomplete_limit),
            cache,
        }
    }
}

/// Raw query pairs. An unparseable query string reads as no parameters, so
/// every failure is answered by the endpoint's own JSON error bodies.
fn query_pairs(query: Result<Query<QueryPairs>, QueryRejection>) -> QueryPairs {
    match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            warn!(error = %rejection, "ignoring unparseable query string");
            QueryPairs::new()
        }
    }
}

/// Handler for GET /search?query=...
pub async fn search_handler(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> SearchOutcome {
    let params = SearchParams::from_pairs(&query_pairs(query));
    state.search.resolve(&params).await
}

/// Handler for GET /autocomplete?input=...
pub async fn autocomplete_handler(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<SuggestionsResponse>, StoreError> {
    let params = AutocompleteParams::from_pairs(&query_pairs(query));
    let suggestions = state.autocomplete.resolve(&params).await?;
    Ok(Json(SuggestionsResponse { suggestions }))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

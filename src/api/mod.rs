//! API Module
//!
//! HTTP handlers and routing for the search service.
//!
//! # Endpoints
//! - `GET /search?query=` - Cached title search
//! - `GET /autocomplete?input=` - Title suggestions
//! - `GET /stats` - Query cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

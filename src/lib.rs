//! Title Search - cached text search over a small item catalog
//!
//! Substring search over item titles with a read-through TTL cache, plus
//! uncached autocomplete suggestions.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod resolver;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;

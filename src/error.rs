//! Error types for the search service
//!
//! One enum per failure domain, all built on thiserror.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Validation Error ==
/// Client-caused input errors. Never has side effects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent from the request
    #[error("Missing required field: {0}")]
    Missing(&'static str),

    /// Field present but empty after trimming
    #[error("Field may not be empty: {0}")]
    Empty(&'static str),
}

impl ValidationError {
    /// Returns the offending field name.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Missing(field) | ValidationError::Empty(field) => field,
        }
    }

    /// Field-to-messages map returned as the `details` of a 400 response.
    pub fn details(&self) -> BTreeMap<String, Vec<String>> {
        let message = match self {
            ValidationError::Missing(_) => "Missing data for required field.",
            ValidationError::Empty(_) => "Field may not be empty.",
        };

        BTreeMap::from([(self.field().to_string(), vec![message.to_string()])])
    }
}

// == Store Error ==
/// Faults raised by the item store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Item rejected on insert
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Backing storage failed
    #[error("Storage backend failure: {0}")]
    Backend(String),
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string()
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

// == Cache Error ==
/// Query cache failures. Callers degrade these to a miss.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache backend could not be reached
    #[error("Cache unavailable: {0}")]
    Unavailable(String),

    /// Payload is not a valid result envelope
    #[error("Malformed cache payload: {0}")]
    Codec(#[from] serde_json::Error),

    /// Payload was written by an incompatible encoder
    #[error("Unsupported cache payload version: {0}")]
    UnsupportedVersion(u32),

    /// Payload holds no results; only non-empty result sets are cached
    #[error("Cache payload holds an empty result set")]
    EmptyResults,
}

// == Result Type Aliases ==
/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type for cache operations.
pub type CacheResult<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_details() {
        let details = ValidationError::Missing("query").details();
        assert_eq!(
            details.get("query"),
            Some(&vec!["Missing data for required field.".to_string()])
        );
    }

    #[test]
    fn test_empty_field_details() {
        let details = ValidationError::Empty("query").details();
        assert_eq!(details.len(), 1);
        assert_eq!(details["query"], vec!["Field may not be empty.".to_string()]);
    }

    #[tokio::test]
    async fn test_store_error_response() {
        let response = StoreError::Backend("disk on fire".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Storage backend failure: disk on fire");
    }
}

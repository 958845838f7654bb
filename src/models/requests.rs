//! Request DTOs for the search API
//!
//! Query-string parameters and the validation applied before a query
//! reaches the cache or the catalog.

use serde::Deserialize;

use crate::error::ValidationError;

/// Decoded query string pairs, in request order. Repeated names are kept.
pub type QueryPairs = Vec<(String, String)>;

/// First value given for `name`, if any.
fn first_value(pairs: &[(String, String)], name: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
}

/// Query parameters for `GET /search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// The search text; required and non-empty
    #[serde(default)]
    pub query: Option<String>,
}

impl SearchParams {
    /// Creates params carrying `query`.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
        }
    }

    /// Builds params from raw query pairs. A repeated `query` keeps its first value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            query: first_value(pairs, "query"),
        }
    }

    /// Validates the request and returns the trimmed query.
    ///
    /// The trimmed query is used both as the catalog filter and as the cache key.
    pub fn validate(&self) -> Result<String, ValidationError> {
        let query = self
            .query
            .as_deref()
            .ok_or(ValidationError::Missing("query"))?
            .trim();

        if query.is_empty() {
            return Err(ValidationError::Empty("query"));
        }

        Ok(query.to_string())
    }
}

/// Query parameters for `GET /autocomplete`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AutocompleteParams {
    #[serde(default)]
    pub input: Option<String>,
}

impl AutocompleteParams {
    /// Creates params carrying `input`.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: Some(input.into()),
        }
    }

    /// Builds params from raw query pairs. A repeated `input` keeps its first value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            input: first_value(pairs, "input"),
        }
    }

    /// The prefix text, or `""` when absent. An empty input matches every title.
    pub fn input(&self) -> &str {
        self.input.as_deref().unwrap_or("")
    }
}

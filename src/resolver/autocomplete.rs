//! Autocomplete Resolver
//!
//! Title suggestions straight from the catalog. Never cached.

use std::sync::Arc;

use tracing::error;

use crate::catalog::ItemStore;
use crate::error::StoreResult;
use crate::models::AutocompleteParams;

/// Default number of suggestions returned.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Limited, uncached title lookup.
#[derive(Clone)]
pub struct AutocompleteResolver {
    store: Arc<dyn ItemStore>,
    limit: usize,
}

impl AutocompleteResolver {
    pub fn new(store: Arc<dyn ItemStore>, limit: usize) -> Self {
        Self { store, limit }
    }

    /// Returns up to `limit` matching titles in catalog order.
    ///
    /// A missing input matches every title.
    pub async fn resolve(&self, params: &AutocompleteParams) -> StoreResult<Vec<String>> {
        let input = params.input();

        let items = self
            .store
            .search_limited(input, self.limit)
            .await
            .inspect_err(|err| error!(input = %input, error = %err, "autocomplete lookup failed"))?;

        Ok(items.into_iter().map(|item| item.title).collect())
    }
}

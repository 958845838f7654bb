//! Catalog Store Module
//!
//! In-memory, insertion-ordered item storage and the `ItemStore` seam the
//! resolvers depend on.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::catalog::{Item, NewItem};
use crate::error::{StoreError, StoreResult};

// == Item Store Trait ==
/// Read access to the catalog used by the search and autocomplete paths.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Returns every item whose title contains `substring`, ignoring case,
    /// in id order.
    async fn search(&self, substring: &str) -> StoreResult<Vec<Item>>;

    /// Same matching and ordering as `search`, truncated to `limit` items.
    async fn search_limited(&self, substring: &str, limit: usize) -> StoreResult<Vec<Item>>;
}

// == Catalog ==
/// Item storage kept in insertion order, which is also id order.
#[derive(Debug)]
pub struct Catalog {
    items: Vec<Item>,
    next_id: u64,
}

impl Catalog {
    // == Constructor ==
    /// Creates an empty catalog. The first inserted item gets id 1.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    // == Insert ==
    /// Appends an item and returns it with its assigned id.
    ///
    /// Title and description must be non-empty.
    pub fn insert(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> StoreResult<Item> {
        let title = title.into();
        let description = description.into();

        if title.trim().is_empty() {
            return Err(StoreError::InvalidItem("title cannot be empty".to_string()));
        }
        if description.trim().is_empty() {
            return Err(StoreError::InvalidItem(
                "description cannot be empty".to_string(),
            ));
        }

        let item = Item {
            id: self.next_id,
            title,
            description,
        };
        self.next_id += 1;
        self.items.push(item.clone());

        Ok(item)
    }

    // == Seed ==
    /// Inserts every item from a JSON array of `{title, description}` objects.
    ///
    /// Returns the number of items inserted. Nothing is inserted if any entry
    /// is invalid.
    pub fn seed_from_json(&mut self, json: &str) -> StoreResult<usize> {
        let new_items: Vec<NewItem> = serde_json::from_str(json)
            .map_err(|e| StoreError::InvalidItem(format!("seed file: {}", e)))?;

        if let Some(bad) = new_items
            .iter()
            .position(|i| i.title.trim().is_empty() || i.description.trim().is_empty())
        {
            return Err(StoreError::InvalidItem(format!(
                "seed entry {} has an empty title or description",
                bad
            )));
        }

        let count = new_items.len();
        for new_item in new_items {
            self.insert(new_item.title, new_item.description)?;
        }

        Ok(count)
    }

    // == Search ==
    /// Returns up to `limit` items whose title contains `substring`, ignoring case.
    pub fn matching(&self, substring: &str, limit: Option<usize>) -> Vec<Item> {
        let needle = substring.to_lowercase();
        let matches = self.items.iter().filter(|item| item.title_contains(&needle));

        match limit {
            Some(limit) => matches.take(limit).cloned().collect(),
            None => matches.cloned().collect(),
        }
    }

    // == Length ==
    /// Returns the number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    // == Is Empty ==
    /// Returns true if the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

// == Shared Catalog ==
/// Thread-safe handle to a `Catalog`, shared between requests.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    /// Wraps a catalog for shared access.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Inserts an item through the shared handle.
    pub async fn insert(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> StoreResult<Item> {
        self.inner.write().await.insert(title, description)
    }
}

#[async_trait]
impl ItemStore for SharedCatalog {
    async fn search(&self, substring: &str) -> StoreResult<Vec<Item>> {
        Ok(self.inner.read().await.matching(substring, None))
    }

    async fn search_limited(&self, substring: &str, limit: usize) -> StoreResult<Vec<Item>> {
        Ok(self.inner.read().await.matching(substring, Some(limit)))
    }
}

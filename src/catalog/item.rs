//! Item Module
//!
//! Catalog items and the projection served in responses and cache payloads.

use serde::{Deserialize, Serialize};

// == Item ==
/// A catalog item. Ids are assigned by the store and never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: u64,
    pub title: String,
    pub description: String,
}

impl Item {
    /// Case-insensitive substring match against the title.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }
}

// == Item Projection ==
/// The `{id, title, description}` view of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemProjection {
    pub id: u64,
    pub title: String,
    pub description: String,
}

impl From<&Item> for ItemProjection {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            description: item.description.clone(),
        }
    }
}

// == New Item ==
/// An item awaiting insertion, as read from a seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct NewItem {
    pub title: String,
    pub description: String,
}

//! Catalog Module
//!
//! The authoritative item store and its substring matching over titles.

mod item;
mod store;


pub use item::{Item, ItemProjection, NewItem};
pub use store::{Catalog, ItemStore, SharedCatalog};

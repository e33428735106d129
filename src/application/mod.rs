//! Application layer: the catalog store observed by presentation

pub mod catalog_store;

pub use catalog_store::{CatalogSnapshot, CatalogStore};

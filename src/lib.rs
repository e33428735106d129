//! Catalog Keeper - product catalog viewer core
//!
//! Fetches a remote product catalog, tracks the fetch lifecycle that
//! presentation surfaces observe, and keeps a locally persisted,
//! deduplicated set of saved products in sqlite.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{CatalogSnapshot, CatalogStore};
pub use domain::{
    CatalogEvent, CatalogFetcher, FetchError, FetchLifecycle, PersistenceError, RemoteProduct,
    SavedProduct, SavedProductRepository, UNKNOWN_EXTERNAL_ID,
};
pub use infrastructure::{
    AppConfig, CatalogClient, ConfigManager, DatabaseConnection, SqliteSavedProductRepository,
};

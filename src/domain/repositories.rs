//! Data-access seams for the catalog store
//!
//! The store depends on these traits rather than on concrete
//! infrastructure, so tests can substitute stub fetchers and stores get
//! their collaborators injected explicitly.

use async_trait::async_trait;

use crate::domain::errors::{FetchError, PersistenceError};
use crate::domain::product::{RemoteProduct, SavedProduct};

/// Fetches one complete catalog snapshot per call.
///
/// Implementations perform exactly one request per invocation, keep no
/// state beyond the in-flight request, and never retry.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Vec<RemoteProduct>, FetchError>;
}

/// Persisted, keyed store of saved products.
///
/// Uniqueness on `external_id` (sentinel excluded) is enforced here, not
/// by callers; records survive process restarts.
#[async_trait]
pub trait SavedProductRepository: Send + Sync {
    /// Insert a saved product. When a row with the same non-sentinel
    /// `external_id` already exists the insert is ignored (first save
    /// wins). Returns whether a row was actually inserted.
    async fn insert(&self, product: &SavedProduct) -> Result<bool, PersistenceError>;

    /// Delete by external id. Deleting an absent id is a no-op; returns
    /// whether any row was removed.
    async fn delete(&self, external_id: i64) -> Result<bool, PersistenceError>;

    /// All saved products in insertion order.
    async fn list_all(&self) -> Result<Vec<SavedProduct>, PersistenceError>;
}

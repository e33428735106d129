//! Catalog store: fetch lifecycle state machine + saved-product set
//!
//! Single source of truth for both presentation surfaces. Owns the
//! `Idle -> Loading -> {Loaded, Failed}` state machine for the remote
//! catalog and delegates saved-product operations to persisted storage.
//! Every committed transition and every successful saved-set mutation
//! broadcasts exactly one `CatalogEvent`.
//!
//! Construct one store and hand it (or clones of it) to whatever
//! consumes it; there is no ambient global instance.

use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{info, warn};

use crate::domain::errors::PersistenceError;
use crate::domain::events::{CatalogEvent, FetchLifecycle};
use crate::domain::product::{RemoteProduct, SavedProduct};
use crate::domain::repositories::{CatalogFetcher, SavedProductRepository};

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Consistent read of the lifecycle and the product list it refers to.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub lifecycle: FetchLifecycle,
    pub products: Vec<RemoteProduct>,
}

struct CatalogState {
    lifecycle: FetchLifecycle,
    /// Result of the most recently completed fetch. Never partially
    /// overwritten by an in-flight fetch and never cleared by a failure.
    products: Vec<RemoteProduct>,
}

/// The catalog store. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct CatalogStore {
    fetcher: Arc<dyn CatalogFetcher>,
    saved: Arc<dyn SavedProductRepository>,
    state: Arc<RwLock<CatalogState>>,
    events: broadcast::Sender<CatalogEvent>,
}

impl CatalogStore {
    pub fn new(fetcher: Arc<dyn CatalogFetcher>, saved: Arc<dyn SavedProductRepository>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            fetcher,
            saved,
            state: Arc::new(RwLock::new(CatalogState {
                lifecycle: FetchLifecycle::Idle,
                products: Vec::new(),
            })),
            events,
        }
    }

    /// Subscribe to store events. Each committed transition and each
    /// successful saved-set mutation is delivered once per subscriber.
    pub fn subscribe(&self) -> broadcast::Receiver<CatalogEvent> {
        self.events.subscribe()
    }

    /// Fetch a fresh catalog snapshot.
    ///
    /// While a fetch is already in flight this is a no-op returning
    /// `false`; the caller observes the outcome of the fetch in flight.
    /// Otherwise the store transitions to `Loading` (retaining the
    /// previous product list and clearing any prior error), performs the
    /// fetch, and commits exactly one terminal transition: `Loaded` with
    /// the new list or `Failed` with a user-facing message. Fetch errors
    /// are never propagated out of this method.
    pub async fn refresh(&self) -> bool {
        {
            let mut state = self.state.write().await;
            if state.lifecycle.is_loading() {
                return false;
            }
            state.lifecycle = FetchLifecycle::Loading;
        }
        self.emit(CatalogEvent::RefreshStarted);

        // No lock is held across the fetch; concurrent refresh() calls
        // observe Loading and bail out above, so at most one fetch is
        // ever in flight and only it can commit a terminal state.
        let outcome = self.fetcher.fetch_catalog().await;

        let mut state = self.state.write().await;
        match outcome {
            Ok(products) => {
                let product_count = products.len();
                state.products = products;
                state.lifecycle = FetchLifecycle::Loaded;
                drop(state);
                info!(product_count, "catalog refresh completed");
                self.emit(CatalogEvent::CatalogLoaded { product_count });
            }
            Err(error) => {
                warn!(%error, "catalog refresh failed");
                let message = error.user_message();
                state.lifecycle = FetchLifecycle::Failed {
                    message: message.clone(),
                };
                drop(state);
                self.emit(CatalogEvent::CatalogFailed { message });
            }
        }
        true
    }

    /// Current lifecycle state.
    pub async fn lifecycle(&self) -> FetchLifecycle {
        self.state.read().await.lifecycle.clone()
    }

    /// Product list from the most recent completed fetch; empty if the
    /// catalog has never loaded.
    pub async fn list_products(&self) -> Vec<RemoteProduct> {
        self.state.read().await.products.clone()
    }

    /// Atomic read of lifecycle plus the product list it refers to.
    pub async fn snapshot(&self) -> CatalogSnapshot {
        let state = self.state.read().await;
        CatalogSnapshot {
            lifecycle: state.lifecycle.clone(),
            products: state.products.clone(),
        }
    }

    /// Persist a catalog product into the saved set, applying the
    /// save-time defaults. Duplicate non-sentinel ids keep the first
    /// save. Storage failures surface here, not in the fetch lifecycle.
    pub async fn save_product(
        &self,
        product: &RemoteProduct,
    ) -> Result<SavedProduct, PersistenceError> {
        let saved = SavedProduct::from_remote(product);
        let inserted = self.saved.insert(&saved).await?;
        if inserted {
            self.emit(CatalogEvent::ProductSaved {
                external_id: saved.external_id,
            });
        }
        Ok(saved)
    }

    /// Delete a saved product by external id. Removing an absent id is a
    /// no-op, not an error.
    pub async fn remove_saved_product(&self, external_id: i64) -> Result<(), PersistenceError> {
        let removed = self.saved.delete(external_id).await?;
        if removed {
            self.emit(CatalogEvent::ProductRemoved { external_id });
        }
        Ok(())
    }

    /// All saved products in insertion order.
    pub async fn list_saved(&self) -> Result<Vec<SavedProduct>, PersistenceError> {
        self.saved.list_all().await
    }

    fn emit(&self, event: CatalogEvent) {
        // A send error only means no subscriber is currently listening
        let _ = self.events.send(event);
    }
}

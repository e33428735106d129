//! Lifecycle state and change notifications for the catalog store
//!
//! These types are what presentation surfaces observe: the current fetch
//! lifecycle and a stream of events, one per committed transition or
//! saved-set mutation.

use serde::{Deserialize, Serialize};

/// Status of the most recent fetch attempt.
///
/// `Loaded` and `Failed` both return to `Loading` on the next refresh;
/// there is no cancelled state because in-flight fetches cannot be
/// cancelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FetchLifecycle {
    /// No fetch has been attempted yet.
    Idle,
    /// A fetch is in flight; the previous product list is retained.
    Loading,
    /// The last fetch completed and its product list is current.
    Loaded,
    /// The last fetch failed; `message` is safe to show to a user.
    Failed { message: String },
}

impl FetchLifecycle {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchLifecycle::Loading)
    }
}

impl std::fmt::Display for FetchLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchLifecycle::Idle => write!(f, "idle"),
            FetchLifecycle::Loading => write!(f, "loading"),
            FetchLifecycle::Loaded => write!(f, "loaded"),
            FetchLifecycle::Failed { message } => write!(f, "failed: {message}"),
        }
    }
}

/// Event broadcast by the catalog store, exactly one per committed
/// lifecycle transition and one per successful saved-set mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogEvent {
    /// A new fetch moved the store into `Loading`.
    RefreshStarted,
    /// A fetch committed `Loaded` with `product_count` products.
    CatalogLoaded { product_count: usize },
    /// A fetch committed `Failed`.
    CatalogFailed { message: String },
    /// A product was inserted into the saved set.
    ProductSaved { external_id: i64 },
    /// A saved product was deleted (only emitted when a row was removed).
    ProductRemoved { external_id: i64 },
}

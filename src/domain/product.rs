//! Product types for the catalog domain
//!
//! `RemoteProduct` is the ephemeral wire value decoded from one catalog
//! fetch; `SavedProduct` is the persisted entity a user keeps locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// External id recorded for a remote product that carried no id.
///
/// Entries with this id are "unknown/ungrouped" and are exempt from the
/// uniqueness constraint on `external_id`.
pub const UNKNOWN_EXTERNAL_ID: i64 = -1;

/// Title recorded when a remote product carried none.
pub const UNTITLED: &str = "Untitled";

/// Product as decoded from the catalog feed.
///
/// Every field may be absent on the wire; absence stays distinct from a
/// default value so callers can substitute their own fallbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteProduct {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub discount: Option<f64>,
}

impl RemoteProduct {
    /// External id used when persisting this product.
    pub fn external_id(&self) -> i64 {
        self.id.unwrap_or(UNKNOWN_EXTERNAL_ID)
    }
}

/// Locally persisted copy of a catalog item.
///
/// Immutable after creation; removed only by an explicit delete. Survives
/// restarts and remote fetch cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedProduct {
    /// Unique key, except `UNKNOWN_EXTERNAL_ID` which may repeat.
    pub external_id: i64,
    pub title: String,
    pub price: f64,
    pub image: String,
    /// When the save happened; listing order follows insertion order.
    pub saved_at: DateTime<Utc>,
}

impl SavedProduct {
    /// Build the persisted entity from a wire value, applying the
    /// save-time defaults: missing title becomes `"Untitled"`, missing
    /// price becomes `0.0`, missing image becomes the empty string.
    pub fn from_remote(remote: &RemoteProduct) -> Self {
        Self {
            external_id: remote.external_id(),
            title: remote
                .title
                .clone()
                .unwrap_or_else(|| UNTITLED.to_string()),
            price: remote.price.unwrap_or(0.0),
            image: remote.image.clone().unwrap_or_default(),
            saved_at: Utc::now(),
        }
    }
}

//! Domain layer: product types, lifecycle state, and data-access seams

pub mod errors;
pub mod events;
pub mod product;
pub mod repositories;

pub use errors::{FetchError, PersistenceError};
pub use events::{CatalogEvent, FetchLifecycle};
pub use product::{RemoteProduct, SavedProduct, UNKNOWN_EXTERNAL_ID, UNTITLED};
pub use repositories::{CatalogFetcher, SavedProductRepository};

//! Error taxonomies for the two fallible layers
//!
//! Fetch errors never escape the store as panics or raw errors; the store
//! converts them into the `Failed` lifecycle state. Persistence errors go
//! straight back to the caller of the save/remove/list operation.

use thiserror::Error;

/// Failure of a single catalog fetch attempt. Each kind wraps the
/// underlying cause message for diagnostics.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The configured endpoint URL is malformed. Only reachable through
    /// misconfiguration; never with the shipped default.
    #[error("invalid catalog endpoint: {0}")]
    InvalidEndpoint(String),

    /// The connection could not be established, timed out, or was
    /// interrupted, or the server answered with a non-success status.
    #[error("catalog transport failure: {0}")]
    TransportFailure(String),

    /// The response body is not valid JSON or does not match the expected
    /// envelope shape.
    #[error("catalog response could not be decoded: {0}")]
    DecodeFailure(String),
}

impl FetchError {
    /// Short message suitable for direct display; the full cause stays in
    /// the logs and in the `Display` form above.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::InvalidEndpoint(_) => {
                "The catalog service address is invalid.".to_string()
            }
            FetchError::TransportFailure(_) => {
                "Could not reach the catalog service. Check your connection and try again."
                    .to_string()
            }
            FetchError::DecodeFailure(_) => {
                "The catalog service returned an unreadable response.".to_string()
            }
        }
    }
}

/// Failure of a saved-product storage operation.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to write saved product: {0}")]
    WriteFailed(#[source] sqlx::Error),

    #[error("failed to delete saved product: {0}")]
    DeleteFailed(#[source] sqlx::Error),

    #[error("failed to read saved products: {0}")]
    ReadFailed(#[source] sqlx::Error),
}

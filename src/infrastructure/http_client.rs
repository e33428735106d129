//! HTTP client for the remote catalog feed
//!
//! One GET per invocation against the fixed catalog endpoint, decoding
//! the `{ status, message, products }` envelope. No retries and no state
//! beyond the in-flight request; retry policy belongs to callers.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::domain::errors::FetchError;
use crate::domain::product::RemoteProduct;
use crate::domain::repositories::CatalogFetcher;
use crate::infrastructure::config::CatalogConfig;

/// Wire envelope of the catalog feed. `status` and `message` are
/// tolerated when absent; a missing or mistyped `products` field is a
/// decode failure.
#[derive(Debug, Deserialize)]
struct CatalogEnvelope {
    #[serde(default)]
    #[allow(dead_code)]
    status: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    message: Option<String>,
    products: Vec<RemoteProduct>,
}

/// Client for the remote catalog endpoint.
#[derive(Debug)]
pub struct CatalogClient {
    client: Client,
    endpoint: Url,
}

impl CatalogClient {
    /// Build a client for the configured endpoint. Fails with
    /// `InvalidEndpoint` when the URL does not parse; with the shipped
    /// default this only happens under misconfiguration.
    pub fn new(config: &CatalogConfig) -> Result<Self, FetchError> {
        let endpoint = Url::parse(&config.endpoint_url)
            .map_err(|e| FetchError::InvalidEndpoint(format!("{}: {e}", config.endpoint_url)))?;

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .gzip(true)
            .build()
            .map_err(|e| FetchError::TransportFailure(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// Decode a response body into the product list.
    fn decode_catalog(body: &[u8]) -> Result<Vec<RemoteProduct>, FetchError> {
        let envelope: CatalogEnvelope = serde_json::from_slice(body)
            .map_err(|e| FetchError::DecodeFailure(e.to_string()))?;
        Ok(envelope.products)
    }
}

#[async_trait]
impl CatalogFetcher for CatalogClient {
    async fn fetch_catalog(&self) -> Result<Vec<RemoteProduct>, FetchError> {
        debug!(endpoint = %self.endpoint, "fetching catalog");

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| FetchError::TransportFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "catalog endpoint answered with non-success status");
            return Err(FetchError::TransportFailure(format!(
                "catalog endpoint answered {status}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::TransportFailure(e.to_string()))?;

        let products = Self::decode_catalog(&body)?;
        debug!(count = products.len(), "catalog fetch decoded");
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_with_products_decodes() {
        let body = br#"{
            "status": "ok",
            "message": "",
            "products": [
                {"id": 1, "title": "Shoe", "price": 49.99, "image": "http://x/1.png"}
            ]
        }"#;
        let products = CatalogClient::decode_catalog(body).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, Some(1));
        assert_eq!(products[0].price, Some(49.99));
    }

    #[test]
    fn envelope_without_status_fields_still_decodes() {
        let body = br#"{"products": []}"#;
        let products = CatalogClient::decode_catalog(body).unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn malformed_json_is_a_decode_failure() {
        let err = CatalogClient::decode_catalog(b"not json at all").unwrap_err();
        assert!(matches!(err, FetchError::DecodeFailure(_)));
    }

    #[test]
    fn missing_products_field_is_a_decode_failure() {
        let err = CatalogClient::decode_catalog(br#"{"status": "ok"}"#).unwrap_err();
        assert!(matches!(err, FetchError::DecodeFailure(_)));
    }

    #[test]
    fn mistyped_products_field_is_a_decode_failure() {
        let err = CatalogClient::decode_catalog(br#"{"products": "nope"}"#).unwrap_err();
        assert!(matches!(err, FetchError::DecodeFailure(_)));
    }

    #[test]
    fn malformed_endpoint_is_rejected_at_construction() {
        let config = CatalogConfig {
            endpoint_url: "not a url".to_string(),
            ..CatalogConfig::default()
        };
        let err = CatalogClient::new(&config).unwrap_err();
        assert!(matches!(err, FetchError::InvalidEndpoint(_)));
    }
}

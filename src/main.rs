//! Demo CLI: wire the store end to end, refresh once, print the results.
//!
//! Presentation proper (screens, navigation) lives outside this crate;
//! this binary only reads the store's exposed state and invokes its
//! operations.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use catalog_keeper::infrastructure::{
    init_logging_with_config, CatalogClient, ConfigManager, DatabaseConnection,
    SqliteSavedProductRepository,
};
use catalog_keeper::{CatalogStore, FetchLifecycle};

#[tokio::main]
async fn main() -> Result<()> {
    let config_manager = ConfigManager::new()?;
    let config = config_manager.load_config().await?;
    init_logging_with_config(&config.logging)?;

    let connection = DatabaseConnection::new(&config.storage.database_url).await?;
    connection.migrate().await?;

    let fetcher = Arc::new(CatalogClient::new(&config.catalog)?);
    let repository = Arc::new(SqliteSavedProductRepository::new(connection.pool().clone()));
    let store = CatalogStore::new(fetcher, repository);

    info!(endpoint = %config.catalog.endpoint_url, "refreshing catalog");
    store.refresh().await;

    match store.lifecycle().await {
        FetchLifecycle::Loaded => {
            let products = store.list_products().await;
            println!("Catalog ({} products):", products.len());
            for product in &products {
                println!(
                    "  [{}] {} - {}",
                    product.id.map_or("?".to_string(), |id| id.to_string()),
                    product.title.as_deref().unwrap_or("Untitled"),
                    product
                        .price
                        .map_or("n/a".to_string(), |p| format!("{p:.2}")),
                );
            }
        }
        FetchLifecycle::Failed { message } => {
            eprintln!("Catalog refresh failed: {message}");
        }
        other => eprintln!("Unexpected state after refresh: {other}"),
    }

    let saved = store.list_saved().await?;
    println!("Saved products ({}):", saved.len());
    for product in &saved {
        println!("  [{}] {} - {:.2}", product.external_id, product.title, product.price);
    }

    Ok(())
}

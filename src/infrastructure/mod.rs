//! Infrastructure layer: configuration, logging, HTTP, and sqlite storage

pub mod config;
pub mod database_connection;
pub mod http_client;
pub mod logging;
pub mod saved_product_repository;

pub use config::{AppConfig, CatalogConfig, ConfigManager, LoggingConfig, StorageConfig};
pub use database_connection::DatabaseConnection;
pub use http_client::CatalogClient;
pub use logging::init_logging_with_config;
pub use saved_product_repository::SqliteSavedProductRepository;

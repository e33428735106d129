//! Configuration loading and management
//!
//! Configuration lives in a single JSON file under the user's config
//! directory and is created with defaults on first run. The catalog
//! endpoint is fixed configuration: nothing in the app mutates it at
//! runtime.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tracing::info;

/// Default catalog feed endpoint.
pub const DEFAULT_CATALOG_ENDPOINT: &str = "https://fakestoreapi.in/api/products";

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Remote catalog feed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog feed URL; one GET per refresh, no parameters.
    pub endpoint_url: String,

    /// Upper bound on a single fetch. Keeps the loading state bounded:
    /// an unresponsive feed resolves to a transport failure instead of
    /// hanging forever.
    pub request_timeout_seconds: u64,

    /// User agent sent with catalog requests.
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_CATALOG_ENDPOINT.to_string(),
            request_timeout_seconds: 30,
            user_agent: format!("catalog-keeper/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Saved-product storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// sqlite URL for the saved-products database.
    pub database_url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = ConfigManager::get_app_data_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("database")
            .join("saved_products.db");
        Self {
            database_url: format!("sqlite:{}", db_path.display()),
        }
    }
}

/// Logging settings consumed by `infrastructure::logging`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter level when RUST_LOG is not set.
    pub level: String,
    pub console_output: bool,
    pub file_output: bool,
    /// Directory for log files; defaults next to the app data.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console_output: true,
            file_output: false,
            log_dir: None,
        }
    }
}

/// Manages the configuration file lifecycle.
pub struct ConfigManager {
    pub config_path: PathBuf,
}

impl ConfigManager {
    /// The application configuration directory.
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get user config directory")?
            .join("catalog-keeper");
        Ok(config_dir)
    }

    /// The application data directory (database, logs).
    pub fn get_app_data_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_local_dir()
            .context("Failed to get user data directory")?
            .join("catalog-keeper");
        Ok(data_dir)
    }

    pub fn new() -> Result<Self> {
        let config_path = Self::get_config_dir()?.join("catalog_keeper_config.json");
        Ok(Self { config_path })
    }

    /// Load configuration from file, creating the default on first run.
    pub async fn load_config(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            info!(path = %self.config_path.display(), "configuration file not found, creating default");
            let default_config = AppConfig::default();
            self.save_config(&default_config).await?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .context("Failed to read configuration file")?;

        let config = serde_json::from_str::<AppConfig>(&content)
            .context("Failed to parse configuration file")?;
        info!(path = %self.config_path.display(), "loaded configuration");
        Ok(config)
    }

    pub async fn save_config(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .context("Failed to create config directory")?;
        }

        let content =
            serde_json::to_string_pretty(config).context("Failed to serialize configuration")?;
        fs::write(&self.config_path, content)
            .await
            .context("Failed to write configuration file")?;
        Ok(())
    }
}

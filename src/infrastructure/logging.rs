//! Logging system configuration and initialization
//!
//! Console logging through tracing-subscriber with an EnvFilter, plus an
//! optional non-blocking file layer. RUST_LOG overrides the configured
//! level.

use anyhow::Result;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::infrastructure::config::{ConfigManager, LoggingConfig};

// Keeps the non-blocking file writer alive for the process lifetime
static LOG_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

fn default_log_dir() -> PathBuf {
    ConfigManager::get_app_data_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("logs")
}

/// Initialize the tracing subscriber from `LoggingConfig`.
///
/// Safe to call once per process; later calls fail because a global
/// subscriber is already set.
pub fn init_logging_with_config(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let console_layer = config
        .console_output
        .then(|| fmt::layer().with_target(true).boxed());

    let file_layer = if config.file_output {
        let log_dir = config.log_dir.clone().unwrap_or_else(default_log_dir);
        std::fs::create_dir_all(&log_dir)?;
        let appender = tracing_appender::rolling::daily(log_dir, "catalog-keeper.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        Some(fmt::layer().with_writer(writer).with_ansi(false).boxed())
    } else {
        None
    };

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

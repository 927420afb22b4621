// src/main.rs - Food Delivery Back Office Entry Point
use std::sync::Arc;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use food_delivery::engine::{catalog::CatalogService, lifecycle::OrderLifecycleManager};
use food_delivery::storage::memory::MemoryStore;
use food_delivery::transport::{router, ApiState};
use food_delivery::AppConfig;

/// Layered configuration: built-in defaults, then `config/default.toml`,
/// then `APP_`-prefixed environment variables.
///
/// Defaults are seeded as the bottom source so a missing file or env var
/// falls through cleanly, while a malformed value in either is an error
/// rather than a silent fallback.
fn load_config() -> Result<AppConfig> {
    let defaults =
        Config::try_from(&AppConfig::default()).context("failed to seed default configuration")?;
    let config = Config::builder()
        .add_source(defaults)
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()
        .context("failed to build configuration")?;

    config.try_deserialize().context("invalid configuration")
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    if config.logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;
    init_tracing(&config);

    info!(version = food_delivery::VERSION, "starting food-delivery back office");

    let store = Arc::new(MemoryStore::new());
    let state = ApiState {
        catalog: Arc::new(CatalogService::new(store.clone())),
        lifecycle: Arc::new(OrderLifecycleManager::new(store.clone(), store)),
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, "listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}

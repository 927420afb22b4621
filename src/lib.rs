// src/lib.rs - Food Delivery Back Office Library Root
//! # Food Delivery Back Office
//!
//! Order placement, pricing, and catalog services for a food-delivery
//! back office. The crate is organized the same way requests flow through
//! it:
//!
//! ```text
//! ┌─────────────────┐
//! │   REST API      │
//! │  (HTTP/JSON)    │
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐     ┌──────────────────┐
//! │ Order Lifecycle │────►│  Item Validator  │
//! │    Manager      │     │  + Pricing Calc  │
//! └────────┬────────┘     └──────────────────┘
//!          │
//! ┌────────▼────────┐
//! │ Catalog / Order │
//! │     Stores      │
//! └─────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use food_delivery::prelude::*;
//! use food_delivery::storage::memory::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = Arc::new(MemoryStore::new());
//!     let lifecycle = OrderLifecycleManager::new(store.clone(), store.clone());
//!
//!     let item = OrderItem::new(MenuItemId::new_v4(), 2)?;
//!     let order = lifecycle.place_order(UserId::new_v4(), vec![item]).await?;
//!     println!("Order placed: {}", order.id);
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]
#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

pub mod core;
pub mod engine;
pub mod storage;
pub mod transport;

pub use crate::core::{
    catalog::{MenuItem, Restaurant, User},
    order::{Order, OrderItem, OrderLine, OrderStatus},
    types::{MenuItemId, OrderId, RestaurantId, Timestamp, UserId},
};
pub use crate::engine::{
    catalog::CatalogService, lifecycle::OrderLifecycleManager, pricing::order_total,
};
pub use crate::storage::{CatalogStore, OrderStore, StorageError};

/// Prelude module that re-exports the most commonly used types
pub mod prelude {
    pub use crate::core::{
        catalog::{MenuItem, Restaurant, User},
        order::{Order, OrderItem, OrderLine, OrderStatus},
        types::{MenuItemId, OrderId, RestaurantId, UserId},
    };
    pub use crate::engine::{catalog::CatalogService, lifecycle::OrderLifecycleManager};
    pub use crate::storage::{CatalogStore, OrderStore};
    pub use crate::{Error, Result};
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error taxonomy for the ordering workflow.
///
/// `NotFound` and `InvalidInput` are client-caused; `Storage` is
/// server-caused. The REST layer maps each kind to a distinct HTTP status,
/// so components below it must never collapse one kind into another.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A referenced resource (customer, menu item, order) does not exist
    #[error("{0}")]
    NotFound(String),

    /// The request itself is malformed: empty item list, non-positive
    /// quantity, missing menu-item reference, bad status filter
    #[error("{0}")]
    InvalidInput(String),

    /// The underlying store failed during a read or write
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl Error {
    /// Build a `NotFound` for a missing user
    pub fn user_not_found(id: UserId) -> Self {
        Self::NotFound(format!("User not found with ID: {id}"))
    }

    /// Build a `NotFound` for a missing menu item
    pub fn menu_item_not_found(id: MenuItemId) -> Self {
        Self::NotFound(format!("Menu item not found with ID: {id}"))
    }

    /// Build a `NotFound` for a missing order
    pub fn order_not_found(id: OrderId) -> Self {
        Self::NotFound(format!("Order not found with ID: {id}"))
    }

    /// Build a `NotFound` for a missing restaurant
    pub fn restaurant_not_found(id: RestaurantId) -> Self {
        Self::NotFound(format!("Restaurant not found with ID: {id}"))
    }
}

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Application configuration, loaded from `config/default.toml` layered
/// with `APP_`-prefixed environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format ("json" or "pretty")
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn error_messages_name_the_resource() {
        let id = UserId::new_v4();
        let err = Error::user_not_found(id);
        assert!(err.to_string().contains(&id.to_string()));
        assert!(matches!(err, Error::NotFound(_)));
    }
}

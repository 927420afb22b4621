// src/engine/lifecycle.rs - Order Lifecycle Manager
//! The order placement orchestrator.
//!
//! `place_order` runs the whole workflow as one logical unit of work:
//!
//! ```text
//! request ──► resolve customer ──► validate every item ──► price
//!                  │ absent              │ any invalid       │
//!                  ▼                     ▼                   ▼
//!              NotFound             InvalidInput       Order{Placed}
//!                                                           │
//!                                                     OrderStore::save
//! ```
//!
//! Steps before the save are pure or read-only; the save is the single
//! externally observable write, so a failure anywhere earlier leaves no
//! partial order behind, and no reader sees the order until the save
//! returns. Reads taken during placement (customer, menu item prices) are
//! per-call snapshots; a concurrent price edit racing a placement is
//! accepted, the price read wins.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::core::order::{Order, OrderItem, OrderStatus};
use crate::core::types::{OrderId, UserId};
use crate::engine::{pricing, validator};
use crate::storage::{CatalogStore, OrderStore};
use crate::{Error, Result};

/// Orchestrates order placement and status-filtered retrieval.
///
/// Holds no per-call state; a single instance serves concurrent callers.
pub struct OrderLifecycleManager {
    catalog: Arc<dyn CatalogStore>,
    orders: Arc<dyn OrderStore>,
}

impl OrderLifecycleManager {
    /// Create a lifecycle manager over the given stores
    pub fn new(catalog: Arc<dyn CatalogStore>, orders: Arc<dyn OrderStore>) -> Self {
        Self { catalog, orders }
    }

    /// Place an order for `customer_id` containing `items`.
    ///
    /// Fails with `NotFound` when the customer does not exist, with
    /// `InvalidInput` when the item list is empty or any single item is
    /// invalid (all-or-nothing), and with `Storage` when the save fails.
    /// Nothing is persisted on any failure path.
    #[instrument(skip(self, items), fields(customer_id = %customer_id, item_count = items.len()))]
    pub async fn place_order(&self, customer_id: UserId, items: Vec<OrderItem>) -> Result<Order> {
        // 1. The customer must exist
        let customer = self
            .catalog
            .find_user_by_id(customer_id)
            .await?
            .ok_or_else(|| Error::user_not_found(customer_id))?;

        // 2. An order needs at least one item
        if items.is_empty() {
            warn!("placement rejected: empty item list");
            return Err(Error::InvalidInput("items cannot be empty".to_string()));
        }

        // 3. Validate every item in input order; first failure aborts
        let lines = validator::validate_items(self.catalog.as_ref(), &items).await?;

        // 4. Exact-decimal total over the price snapshots
        let total = pricing::order_total(&lines);

        // 5. Construct the order in its initial state
        let order = Order::place(customer.id, lines, total);

        // 6. The one observable write
        let saved = self.orders.save(order).await?;

        info!(order_id = %saved.id, total = %saved.total, "order placed");
        Ok(saved)
    }

    /// All orders currently in `status`, in store-defined order.
    ///
    /// An unused status bucket yields an empty vec, not an error. Malformed
    /// status strings are the caller-facing layer's problem; by the time a
    /// value reaches here it is already a well-formed [`OrderStatus`].
    #[instrument(skip(self))]
    pub async fn orders_by_status(&self, status: OrderStatus) -> Result<Vec<Order>> {
        Ok(self.orders.find_by_status(status).await?)
    }

    /// All orders placed by one customer
    pub async fn orders_by_customer(&self, customer_id: UserId) -> Result<Vec<Order>> {
        Ok(self.orders.find_by_customer(customer_id).await?)
    }

    /// Look up a single order by id
    pub async fn order_by_id(&self, id: OrderId) -> Result<Order> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::order_not_found(id))
    }
}

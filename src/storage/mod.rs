// src/storage/mod.rs - Storage Abstractions
//! Store traits consumed by the engine.
//!
//! The catalog store holds users, restaurants, and menu items; the order
//! store holds placed orders. The engine only ever talks to these traits,
//! so a durable backend can be swapped in without touching the workflow.
//! The crate ships one reference implementation, [`memory::MemoryStore`].

pub mod memory;

use async_trait::async_trait;

use crate::core::{
    catalog::{MenuItem, Restaurant, User},
    order::{Order, OrderStatus},
    types::{MenuItemId, OrderId, RestaurantId, UserId},
};

/// Errors surfaced by a store backend.
///
/// These are server-caused failures, reported distinctly from the
/// client-caused `NotFound`/`InvalidInput` kinds. A lookup that finds
/// nothing is `Ok(None)`, not an error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    /// A write was rejected by the backend
    #[error("write failed: {0}")]
    WriteFailed(String),

    /// A read failed in the backend
    #[error("read failed: {0}")]
    ReadFailed(String),

    /// A uniqueness constraint was violated
    #[error("constraint violated: {0}")]
    Conflict(String),
}

/// Result type for store operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Durable storage for users, restaurants, and menu items.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Look up a user by id
    async fn find_user_by_id(&self, id: UserId) -> StorageResult<Option<User>>;

    /// Look up a user by email
    async fn find_user_by_email(&self, email: &str) -> StorageResult<Option<User>>;

    /// All users, in store-defined order
    async fn all_users(&self) -> StorageResult<Vec<User>>;

    /// Insert or update a user. Email uniqueness is enforced here.
    async fn upsert_user(&self, user: User) -> StorageResult<User>;

    /// Delete a user; returns whether it existed
    async fn delete_user(&self, id: UserId) -> StorageResult<bool>;

    /// Look up a restaurant by id
    async fn find_restaurant_by_id(&self, id: RestaurantId) -> StorageResult<Option<Restaurant>>;

    /// Insert or update a restaurant
    async fn upsert_restaurant(&self, restaurant: Restaurant) -> StorageResult<Restaurant>;

    /// Look up a menu item by id
    async fn find_menu_item_by_id(&self, id: MenuItemId) -> StorageResult<Option<MenuItem>>;

    /// All menu items belonging to one restaurant
    async fn menu_items_by_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> StorageResult<Vec<MenuItem>>;

    /// Insert or update a menu item
    async fn upsert_menu_item(&self, item: MenuItem) -> StorageResult<MenuItem>;

    /// Delete a menu item; returns whether it existed
    async fn delete_menu_item(&self, id: MenuItemId) -> StorageResult<bool>;
}

/// Durable storage for placed orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist an order. This is the single externally observable write of
    /// the placement workflow; an order is invisible to readers until this
    /// returns `Ok`.
    async fn save(&self, order: Order) -> StorageResult<Order>;

    /// Look up an order by id
    async fn find_by_id(&self, id: OrderId) -> StorageResult<Option<Order>>;

    /// All orders currently in the given status, in store-defined order
    async fn find_by_status(&self, status: OrderStatus) -> StorageResult<Vec<Order>>;

    /// All orders placed by the given customer
    async fn find_by_customer(&self, customer_id: UserId) -> StorageResult<Vec<Order>>;
}

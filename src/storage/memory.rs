// src/storage/memory.rs - In-Memory Storage Backend
//! Concurrent in-memory backend for both stores, built on `DashMap`.
//!
//! Primary maps are keyed by id; orders additionally keep status and
//! customer secondary indexes so the status-filtered read stays O(bucket)
//! instead of scanning every order. A single `save` call is atomic from a
//! reader's point of view: the order appears in the primary map before the
//! indexes, and readers always resolve through the primary map.

use dashmap::{DashMap, DashSet};
use tracing::{debug, info, instrument};

use async_trait::async_trait;

use crate::core::{
    catalog::{MenuItem, Restaurant, User},
    order::{Order, OrderStatus},
    types::{MenuItemId, OrderId, RestaurantId, UserId},
};
use crate::storage::{CatalogStore, OrderStore, StorageError, StorageResult};

/// In-memory implementation of [`CatalogStore`] and [`OrderStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: DashMap<UserId, User>,
    email_index: DashMap<String, UserId>,
    restaurants: DashMap<RestaurantId, Restaurant>,
    menu_items: DashMap<MenuItemId, MenuItem>,
    restaurant_index: DashMap<RestaurantId, DashSet<MenuItemId>>,

    orders: DashMap<OrderId, Order>,
    status_index: DashMap<OrderStatus, DashSet<OrderId>>,
    customer_index: DashMap<UserId, DashSet<OrderId>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        info!("initializing in-memory store");
        Self::default()
    }

    /// Number of orders held
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    fn index_order(&self, order: &Order) {
        self.status_index
            .entry(order.status)
            .or_default()
            .insert(order.id);
        self.customer_index
            .entry(order.customer_id)
            .or_default()
            .insert(order.id);
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn find_user_by_id(&self, id: UserId) -> StorageResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn find_user_by_email(&self, email: &str) -> StorageResult<Option<User>> {
        let id = match self.email_index.get(email) {
            Some(id) => *id,
            None => return Ok(None),
        };
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn all_users(&self) -> StorageResult<Vec<User>> {
        Ok(self.users.iter().map(|e| e.value().clone()).collect())
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn upsert_user(&self, user: User) -> StorageResult<User> {
        if let Some(existing) = self.email_index.get(&user.email) {
            if *existing != user.id {
                return Err(StorageError::Conflict(format!(
                    "email already registered: {}",
                    user.email
                )));
            }
        }

        // Drop the previous email mapping when the address changed
        if let Some(previous) = self.users.get(&user.id) {
            if previous.email != user.email {
                self.email_index.remove(&previous.email);
            }
        }

        self.email_index.insert(user.email.clone(), user.id);
        self.users.insert(user.id, user.clone());
        debug!("user stored");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> StorageResult<bool> {
        match self.users.remove(&id) {
            Some((_, user)) => {
                self.email_index.remove(&user.email);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_restaurant_by_id(&self, id: RestaurantId) -> StorageResult<Option<Restaurant>> {
        Ok(self.restaurants.get(&id).map(|r| r.clone()))
    }

    async fn upsert_restaurant(&self, restaurant: Restaurant) -> StorageResult<Restaurant> {
        self.restaurants.insert(restaurant.id, restaurant.clone());
        Ok(restaurant)
    }

    async fn find_menu_item_by_id(&self, id: MenuItemId) -> StorageResult<Option<MenuItem>> {
        Ok(self.menu_items.get(&id).map(|m| m.clone()))
    }

    async fn menu_items_by_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> StorageResult<Vec<MenuItem>> {
        let ids = match self.restaurant_index.get(&restaurant_id) {
            Some(ids) => ids,
            None => return Ok(Vec::new()),
        };
        Ok(ids
            .iter()
            .filter_map(|id| self.menu_items.get(&id).map(|m| m.clone()))
            .collect())
    }

    #[instrument(skip(self, item), fields(menu_item_id = %item.id))]
    async fn upsert_menu_item(&self, item: MenuItem) -> StorageResult<MenuItem> {
        self.restaurant_index
            .entry(item.restaurant_id)
            .or_default()
            .insert(item.id);
        self.menu_items.insert(item.id, item.clone());
        debug!("menu item stored");
        Ok(item)
    }

    async fn delete_menu_item(&self, id: MenuItemId) -> StorageResult<bool> {
        match self.menu_items.remove(&id) {
            Some((_, item)) => {
                if let Some(ids) = self.restaurant_index.get(&item.restaurant_id) {
                    ids.remove(&id);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    async fn save(&self, order: Order) -> StorageResult<Order> {
        self.orders.insert(order.id, order.clone());
        self.index_order(&order);
        debug!(status = %order.status, total = %order.total, "order stored");
        Ok(order)
    }

    async fn find_by_id(&self, id: OrderId) -> StorageResult<Option<Order>> {
        Ok(self.orders.get(&id).map(|o| o.clone()))
    }

    async fn find_by_status(&self, status: OrderStatus) -> StorageResult<Vec<Order>> {
        let ids = match self.status_index.get(&status) {
            Some(ids) => ids,
            None => return Ok(Vec::new()),
        };
        // Resolve through the primary map so a partially indexed order can
        // never be observed
        Ok(ids
            .iter()
            .filter_map(|id| self.orders.get(&id).map(|o| o.clone()))
            .collect())
    }

    async fn find_by_customer(&self, customer_id: UserId) -> StorageResult<Vec<Order>> {
        let ids = match self.customer_index.get(&customer_id) {
            Some(ids) => ids,
            None => return Ok(Vec::new()),
        };
        Ok(ids
            .iter()
            .filter_map(|id| self.orders.get(&id).map(|o| o.clone()))
            .collect())
    }
}

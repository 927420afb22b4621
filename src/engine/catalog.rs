// src/engine/catalog.rs - Catalog Services
//! CRUD services for users, restaurants, and menu items.
//!
//! Field validation lives on the entity constructors; this layer adds the
//! store round-trips and the `NotFound` mapping for missing ids.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::core::catalog::{MenuItem, Restaurant, User};
use crate::core::types::{MenuItemId, RestaurantId, UserId};
use crate::storage::CatalogStore;
use crate::{Error, Result};

/// Service layer for managing the catalog.
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    /// Create a catalog service over the given store
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Create a new user
    #[instrument(skip_all, fields(email = %email))]
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        address: &str,
    ) -> Result<User> {
        let user = User::new(name, email, phone, address)?;
        info!(user_id = %user.id, "creating user");
        Ok(self.store.upsert_user(user).await?)
    }

    /// Get a user by id
    pub async fn user_by_id(&self, id: UserId) -> Result<User> {
        self.store
            .find_user_by_id(id)
            .await?
            .ok_or_else(|| Error::user_not_found(id))
    }

    /// Get a user by email
    pub async fn user_by_email(&self, email: &str) -> Result<User> {
        self.store
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| Error::NotFound(format!("User not found with email: {email}")))
    }

    /// Get all users
    pub async fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.store.all_users().await?)
    }

    /// Update a user's details, keeping its id
    pub async fn update_user(
        &self,
        id: UserId,
        name: &str,
        email: &str,
        phone: &str,
        address: &str,
    ) -> Result<User> {
        let existing = self.user_by_id(id).await?;
        let mut updated = User::new(name, email, phone, address)?;
        updated.id = existing.id;
        Ok(self.store.upsert_user(updated).await?)
    }

    /// Delete a user by id
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<()> {
        if self.store.delete_user(id).await? {
            info!("user deleted");
            Ok(())
        } else {
            Err(Error::user_not_found(id))
        }
    }

    /// Register a restaurant
    pub async fn create_restaurant(
        &self,
        name: &str,
        address: &str,
        cuisine: &str,
    ) -> Result<Restaurant> {
        let restaurant = Restaurant::new(name, address, cuisine)?;
        info!(restaurant_id = %restaurant.id, "creating restaurant");
        Ok(self.store.upsert_restaurant(restaurant).await?)
    }

    /// Get a restaurant by id
    pub async fn restaurant_by_id(&self, id: RestaurantId) -> Result<Restaurant> {
        self.store
            .find_restaurant_by_id(id)
            .await?
            .ok_or_else(|| Error::restaurant_not_found(id))
    }

    /// Add a menu item to an existing restaurant
    #[instrument(skip_all, fields(restaurant_id = %restaurant_id, name = %name))]
    pub async fn add_menu_item(
        &self,
        restaurant_id: RestaurantId,
        name: &str,
        description: Option<&str>,
        price: Decimal,
    ) -> Result<MenuItem> {
        // The owning restaurant must exist before items can hang off it
        self.restaurant_by_id(restaurant_id).await?;

        let item = MenuItem::new(name, description, price, restaurant_id)?;
        info!(menu_item_id = %item.id, "adding menu item");
        Ok(self.store.upsert_menu_item(item).await?)
    }

    /// Get a menu item by id
    pub async fn menu_item_by_id(&self, id: MenuItemId) -> Result<MenuItem> {
        self.store
            .find_menu_item_by_id(id)
            .await?
            .ok_or_else(|| Error::menu_item_not_found(id))
    }

    /// All menu items for one restaurant
    pub async fn menu_items_by_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<MenuItem>> {
        Ok(self.store.menu_items_by_restaurant(restaurant_id).await?)
    }

    /// Update a menu item's name, description, and price, keeping its id
    /// and restaurant.
    ///
    /// Already-placed orders are unaffected: they carry their own price
    /// snapshots.
    pub async fn update_menu_item(
        &self,
        id: MenuItemId,
        name: &str,
        description: Option<&str>,
        price: Decimal,
    ) -> Result<MenuItem> {
        let existing = self.menu_item_by_id(id).await?;
        let mut updated = MenuItem::new(name, description, price, existing.restaurant_id)?;
        updated.id = existing.id;
        Ok(self.store.upsert_menu_item(updated).await?)
    }

    /// Delete a menu item by id
    pub async fn delete_menu_item(&self, id: MenuItemId) -> Result<()> {
        if self.store.delete_menu_item(id).await? {
            Ok(())
        } else {
            Err(Error::menu_item_not_found(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;
    use rust_decimal_macros::dec;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn user_crud_round_trip() {
        let svc = service();

        let created = svc
            .create_user("Ada", "ada@example.com", "555-0100", "1 Main St")
            .await
            .unwrap();
        assert_eq!(svc.user_by_id(created.id).await.unwrap(), created);
        assert_eq!(svc.user_by_email("ada@example.com").await.unwrap(), created);

        let updated = svc
            .update_user(created.id, "Ada L", "ada@example.com", "555-0100", "2 Oak St")
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.address, "2 Oak St");

        svc.delete_user(created.id).await.unwrap();
        assert!(matches!(
            svc.user_by_id(created.id).await.unwrap_err(),
            Error::NotFound(_)
        ));
        assert!(matches!(
            svc.delete_user(created.id).await.unwrap_err(),
            Error::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn invalid_user_fields_never_reach_the_store() {
        let svc = service();
        let err = svc
            .create_user("Ada", "not-an-email", "555-0100", "1 Main St")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(svc.all_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn menu_items_require_an_existing_restaurant() {
        let svc = service();

        let err = svc
            .add_menu_item(RestaurantId::new_v4(), "Margherita", None, dec!(9.99))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        let restaurant = svc
            .create_restaurant("Trattoria", "2 Side St", "Italian")
            .await
            .unwrap();
        let item = svc
            .add_menu_item(restaurant.id, "Margherita", Some("wood-fired"), dec!(9.99))
            .await
            .unwrap();
        assert_eq!(item.restaurant_id, restaurant.id);
        assert_eq!(
            svc.menu_items_by_restaurant(restaurant.id).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn menu_item_update_keeps_id_and_owner() {
        let svc = service();
        let restaurant = svc
            .create_restaurant("Trattoria", "2 Side St", "Italian")
            .await
            .unwrap();
        let item = svc
            .add_menu_item(restaurant.id, "Margherita", None, dec!(9.99))
            .await
            .unwrap();

        let updated = svc
            .update_menu_item(item.id, "Margherita DOP", None, dec!(12.99))
            .await
            .unwrap();
        assert_eq!(updated.id, item.id);
        assert_eq!(updated.restaurant_id, restaurant.id);
        assert_eq!(updated.price, dec!(12.99));

        let err = svc
            .update_menu_item(item.id, "Margherita", None, dec!(0))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}

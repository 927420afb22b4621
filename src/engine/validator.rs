// src/engine/validator.rs - Order Item Validator
//! Structural validation of candidate order items.
//!
//! Every item in a placement request passes through here before anything
//! is persisted. A single invalid item aborts the whole placement; there
//! is no partial acceptance. Validation has no side effects.
//!
//! A successfully validated item comes back as an [`OrderLine`] carrying
//! the menu item's name and unit price as read from the catalog at this
//! instant. That snapshot is what the pricing calculator and the stored
//! order use; later edits to the menu item never reprice the order.

use tracing::debug;

use crate::core::order::{OrderItem, OrderLine};
use crate::storage::CatalogStore;
use crate::{Error, Result};

/// Validate one candidate item against the catalog.
///
/// Checks, in order:
/// 1. quantity is strictly positive — items deserialized from the wire can
///    bypass [`OrderItem::new`], so the invariant is re-asserted here;
/// 2. the menu item reference resolves in the catalog store.
pub async fn validate_item(catalog: &dyn CatalogStore, item: &OrderItem) -> Result<OrderLine> {
    if item.quantity == 0 {
        return Err(Error::InvalidInput(
            "Invalid order item: Quantity must be a positive value".to_string(),
        ));
    }

    let menu_item = catalog
        .find_menu_item_by_id(item.menu_item_id)
        .await?
        .ok_or_else(|| {
            Error::InvalidInput(format!(
                "Invalid order item: Menu item not found with ID: {}",
                item.menu_item_id
            ))
        })?;

    debug!(menu_item_id = %menu_item.id, unit_price = %menu_item.price, "item validated");

    Ok(OrderLine {
        menu_item_id: menu_item.id,
        name: menu_item.name,
        unit_price: menu_item.price,
        quantity: item.quantity,
    })
}

/// Validate every candidate item, in input order.
///
/// Returns the priced lines in the same order as the input, or the first
/// failure. All-or-nothing: one bad item fails the batch even if every
/// other item is valid.
pub async fn validate_items(
    catalog: &dyn CatalogStore,
    items: &[OrderItem],
) -> Result<Vec<OrderLine>> {
    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        lines.push(validate_item(catalog, item).await?);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::MenuItem;
    use crate::core::types::{MenuItemId, RestaurantId};
    use crate::storage::memory::MemoryStore;
    use rust_decimal_macros::dec;

    async fn store_with_item(price: rust_decimal::Decimal) -> (MemoryStore, MenuItem) {
        let store = MemoryStore::new();
        let item = MenuItem::new("Margherita", None, price, RestaurantId::new_v4()).unwrap();
        store.upsert_menu_item(item.clone()).await.unwrap();
        (store, item)
    }

    #[tokio::test]
    async fn valid_item_becomes_priced_line() {
        let (store, menu_item) = store_with_item(dec!(9.99)).await;
        let item = OrderItem::new(menu_item.id, 2).unwrap();

        let line = validate_item(&store, &item).await.unwrap();
        assert_eq!(line.menu_item_id, menu_item.id);
        assert_eq!(line.unit_price, dec!(9.99));
        assert_eq!(line.quantity, 2);
        assert_eq!(line.name, "Margherita");
    }

    #[tokio::test]
    async fn unresolvable_menu_item_is_invalid_input() {
        let store = MemoryStore::new();
        let item = OrderItem::new(MenuItemId::new_v4(), 1).unwrap();

        let err = validate_item(&store, &item).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("Menu item not found"));
    }

    #[tokio::test]
    async fn zero_quantity_is_rejected_even_off_the_wire() {
        let (store, menu_item) = store_with_item(dec!(9.99)).await;
        // Simulate a deserialized item that bypassed OrderItem::new
        let item = OrderItem {
            menu_item_id: menu_item.id,
            quantity: 0,
        };

        let err = validate_item(&store, &item).await.unwrap_err();
        assert!(err.to_string().contains("Quantity must be a positive value"));
    }

    #[tokio::test]
    async fn first_bad_item_fails_the_batch() {
        let (store, menu_item) = store_with_item(dec!(5.00)).await;
        let good = OrderItem::new(menu_item.id, 1).unwrap();
        let bad = OrderItem::new(MenuItemId::new_v4(), 1).unwrap();

        let err = validate_items(&store, &[good, bad]).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let good2 = OrderItem::new(menu_item.id, 3).unwrap();
        let lines = validate_items(&store, &[good, good2]).await.unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].quantity, 3);
    }
}

// tests/placement.rs - End-to-End Order Placement Workflow
//! Exercises the placement workflow through the public API only: catalog
//! service to seed data, lifecycle manager to place and read orders.

use std::sync::Arc;

use rust_decimal_macros::dec;

use food_delivery::prelude::*;
use food_delivery::storage::memory::MemoryStore;

struct World {
    catalog: Arc<CatalogService>,
    lifecycle: OrderLifecycleManager,
    customer: User,
    pizza: MenuItem,
    salad: MenuItem,
}

async fn world() -> World {
    let store = Arc::new(MemoryStore::new());
    let catalog = Arc::new(CatalogService::new(store.clone()));
    let lifecycle = OrderLifecycleManager::new(store.clone(), store);

    let customer = catalog
        .create_user("Ada", "ada@example.com", "555-0100", "1 Main St")
        .await
        .unwrap();
    let restaurant = catalog
        .create_restaurant("Trattoria", "2 Side St", "Italian")
        .await
        .unwrap();
    let pizza = catalog
        .add_menu_item(restaurant.id, "Margherita", Some("wood-fired"), dec!(9.99))
        .await
        .unwrap();
    let salad = catalog
        .add_menu_item(restaurant.id, "Caesar", None, dec!(5.00))
        .await
        .unwrap();

    World {
        catalog,
        lifecycle,
        customer,
        pizza,
        salad,
    }
}

#[tokio::test]
async fn placed_order_totals_exactly() {
    let w = world().await;

    let order = w
        .lifecycle
        .place_order(
            w.customer.id,
            vec![
                OrderItem::new(w.pizza.id, 2).unwrap(),
                OrderItem::new(w.salad.id, 1).unwrap(),
            ],
        )
        .await
        .unwrap();

    assert_eq!(order.total, dec!(24.98));
    assert_eq!(order.total.to_string(), "24.98");
    assert_eq!(order.status, OrderStatus::Placed);
}

#[tokio::test]
async fn placement_failures_leave_no_orders_behind() {
    let w = world().await;

    // Empty item list
    let err = w
        .lifecycle
        .place_order(w.customer.id, Vec::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));

    // Unknown customer
    let err = w
        .lifecycle
        .place_order(UserId::new_v4(), vec![OrderItem::new(w.pizza.id, 1).unwrap()])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    // One invalid item among valid ones
    let err = w
        .lifecycle
        .place_order(
            w.customer.id,
            vec![
                OrderItem::new(w.pizza.id, 1).unwrap(),
                OrderItem::new(MenuItemId::new_v4(), 1).unwrap(),
            ],
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));

    for status in [
        OrderStatus::Placed,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ] {
        assert!(w.lifecycle.orders_by_status(status).await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn round_trip_preserves_everything() {
    let w = world().await;

    let placed = w
        .lifecycle
        .place_order(
            w.customer.id,
            vec![
                OrderItem::new(w.pizza.id, 3).unwrap(),
                OrderItem::new(w.salad.id, 2).unwrap(),
            ],
        )
        .await
        .unwrap();

    let reread = w.lifecycle.order_by_id(placed.id).await.unwrap();

    assert_eq!(reread.customer_id, w.customer.id);
    assert_eq!(reread.status, OrderStatus::Placed);
    assert_eq!(reread.total, dec!(39.97));
    assert_eq!(reread.lines.len(), 2);
    assert_eq!(reread.lines[0].menu_item_id, w.pizza.id);
    assert_eq!(reread.lines[0].quantity, 3);
    assert_eq!(reread.lines[1].menu_item_id, w.salad.id);
    assert_eq!(reread.lines[1].quantity, 2);
    assert_eq!(reread.placed_at, placed.placed_at);
}

#[tokio::test]
async fn status_reads_see_only_matching_orders() {
    let w = world().await;

    w.lifecycle
        .place_order(w.customer.id, vec![OrderItem::new(w.pizza.id, 1).unwrap()])
        .await
        .unwrap();
    w.lifecycle
        .place_order(w.customer.id, vec![OrderItem::new(w.salad.id, 1).unwrap()])
        .await
        .unwrap();

    let placed = w.lifecycle.orders_by_status(OrderStatus::Placed).await.unwrap();
    assert_eq!(placed.len(), 2);

    let delivered = w
        .lifecycle
        .orders_by_status(OrderStatus::Delivered)
        .await
        .unwrap();
    assert!(delivered.is_empty());
}

#[tokio::test]
async fn concurrent_placements_do_not_interfere() {
    let w = world().await;
    let bob = w
        .catalog
        .create_user("Bob", "bob@example.com", "555-0101", "2 Oak St")
        .await
        .unwrap();

    let lifecycle = Arc::new(w.lifecycle);
    let mut handles = Vec::new();
    for customer in [w.customer.id, bob.id] {
        for _ in 0..10 {
            let lifecycle = lifecycle.clone();
            let pizza = w.pizza.id;
            handles.push(tokio::spawn(async move {
                lifecycle
                    .place_order(customer, vec![OrderItem::new(pizza, 1).unwrap()])
                    .await
            }));
        }
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(
        lifecycle.orders_by_status(OrderStatus::Placed).await.unwrap().len(),
        20
    );
    assert_eq!(lifecycle.orders_by_customer(bob.id).await.unwrap().len(), 10);
}

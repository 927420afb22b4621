// src/core/mod.rs - Core Domain Module
//! Core domain types: catalog entities, orders, and shared type aliases.

pub mod catalog;
pub mod order;
pub mod types;

pub use catalog::{MenuItem, Restaurant, User};
pub use order::{Order, OrderItem, OrderLine, OrderStatus};
pub use types::{MenuItemId, OrderId, RestaurantId, Timestamp, UserId};

// src/core/types.rs - Core Type Definitions
//! Core type definitions used throughout the back office.
//!
//! Ids are UUIDs for global uniqueness. Monetary values are
//! [`rust_decimal::Decimal`] end to end: summing two-decimal currency
//! amounts must never produce binary floating-point representation error,
//! so `f64` is not used for any stored or computed price.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Type alias for user (customer) identifiers
pub type UserId = uuid::Uuid;

/// Type alias for restaurant identifiers
pub type RestaurantId = uuid::Uuid;

/// Type alias for menu item identifiers
pub type MenuItemId = uuid::Uuid;

/// Type alias for order identifiers
pub type OrderId = uuid::Uuid;

/// Type alias for timestamps
pub type Timestamp = DateTime<Utc>;

/// Exact-decimal monetary amount
pub type Money = Decimal;

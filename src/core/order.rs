// src/core/order.rs - Order Domain Models
//! Order domain models and the order lifecycle state machine.
//!
//! # Order Lifecycle
//!
//! ```text
//! Placed → Preparing → OutForDelivery → Delivered
//!    ↘         ↘            ↘
//!     → → → → → → → → → → Cancelled
//! ```
//!
//! `Placed` is the only initial state and is set exclusively by the
//! lifecycle manager at creation. `Delivered` and `Cancelled` are terminal.

use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::types::{MenuItemId, OrderId, Timestamp, UserId};
use crate::{Error, Result};

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order accepted and persisted; awaiting the kitchen
    Placed,
    /// The restaurant is preparing the order
    Preparing,
    /// A courier has picked the order up
    OutForDelivery,
    /// The order reached the customer
    Delivered,
    /// The order was cancelled before delivery
    Cancelled,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placed => write!(f, "placed"),
            Self::Preparing => write!(f, "preparing"),
            Self::OutForDelivery => write!(f, "out_for_delivery"),
            Self::Delivered => write!(f, "delivered"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "placed" => Ok(Self::Placed),
            "preparing" => Ok(Self::Preparing),
            "out_for_delivery" => Ok(Self::OutForDelivery),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(Error::InvalidInput(format!("Invalid order status: {s}"))),
        }
    }
}

impl OrderStatus {
    /// Check if the order is in a terminal state
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Get the next valid states from the current state
    pub fn valid_transitions(self) -> Vec<OrderStatus> {
        match self {
            Self::Placed => vec![Self::Preparing, Self::Cancelled],
            Self::Preparing => vec![Self::OutForDelivery, Self::Cancelled],
            Self::OutForDelivery => vec![Self::Delivered, Self::Cancelled],
            // Terminal states have no valid transitions
            Self::Delivered | Self::Cancelled => vec![],
        }
    }

    /// Check if transition from this state to another is valid
    pub fn can_transition_to(self, next: Self) -> bool {
        self.valid_transitions().contains(&next)
    }
}

/// A candidate line item supplied by the caller of `place_order`.
///
/// Before placement this is a transient value object; after placement its
/// contents live on inside an [`OrderLine`]. Quantity positivity is
/// enforced here, at construction, never deferred or clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// The menu item being ordered
    pub menu_item_id: MenuItemId,
    /// How many of it, strictly positive
    pub quantity: u32,
}

impl OrderItem {
    /// Create an order item. Fails with `InvalidInput` if `quantity` is zero.
    pub fn new(menu_item_id: MenuItemId, quantity: u32) -> Result<Self> {
        if quantity == 0 {
            return Err(Error::InvalidInput(
                "Quantity must be a positive value".to_string(),
            ));
        }
        Ok(Self {
            menu_item_id,
            quantity,
        })
    }
}

/// A validated, priced line owned by exactly one order.
///
/// `unit_price` is the menu item's price as read at placement time; it is
/// never re-derived from the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// The menu item this line refers to
    pub menu_item_id: MenuItemId,
    /// Menu item name at placement time
    pub name: String,
    /// Unit price snapshot taken at placement time
    pub unit_price: Decimal,
    /// Quantity, strictly positive
    pub quantity: u32,
}

impl OrderLine {
    /// Line subtotal: `unit_price × quantity` in exact decimal arithmetic
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// An order placed by a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID, assigned at construction
    pub id: OrderId,
    /// The customer who placed the order
    pub customer_id: UserId,
    /// Ordered, non-empty sequence of priced lines
    pub lines: Vec<OrderLine>,
    /// Total price, `Σ unit_price × quantity`, always positive
    pub total: Decimal,
    /// Current lifecycle status
    pub status: OrderStatus,
    /// Placement timestamp, set once and never mutated
    pub placed_at: Timestamp,
}

impl Order {
    /// Construct a freshly placed order.
    ///
    /// Only the lifecycle manager calls this; it is the single place where
    /// `Placed` status and the creation timestamp are assigned.
    pub(crate) fn place(customer_id: UserId, lines: Vec<OrderLine>, total: Decimal) -> Self {
        debug_assert!(!lines.is_empty(), "order must contain at least one line");
        Self {
            id: OrderId::new_v4(),
            customer_id,
            lines,
            total,
            status: OrderStatus::Placed,
            placed_at: Utc::now(),
        }
    }
}

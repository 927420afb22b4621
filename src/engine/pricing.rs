// src/engine/pricing.rs - Pricing Calculator
//! Monetary total aggregation for validated order lines.
//!
//! Totals are computed entirely in [`rust_decimal::Decimal`], so summing
//! two-decimal currency values is exact: `9.99 × 2 + 5.00` is `24.98`,
//! never `24.979999…`. The calculator is pure and has no failure path of
//! its own — lines reaching it already carry a resolved unit price, and an
//! unpriced line is a programming error caught by the debug assertion
//! rather than silently priced at zero.

use rust_decimal::Decimal;

use crate::core::order::OrderLine;

/// Total price of an order: `Σ unit_price × quantity` over its lines.
pub fn order_total(lines: &[OrderLine]) -> Decimal {
    lines
        .iter()
        .map(|line| {
            debug_assert!(
                line.unit_price > Decimal::ZERO,
                "order line for {} carries no price snapshot",
                line.menu_item_id
            );
            line.subtotal()
        })
        .sum()
}

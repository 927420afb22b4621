// src/engine/mod.rs - Business Logic Engine
//! Business logic: item validation, pricing, the order lifecycle manager,
//! and catalog services. Everything here is pure or store-mediated; the
//! engine holds no mutable state of its own between calls.

pub mod catalog;
pub mod lifecycle;
pub mod pricing;
pub mod validator;

pub use catalog::CatalogService;
pub use lifecycle::OrderLifecycleManager;
pub use pricing::order_total;
pub use validator::{validate_item, validate_items};

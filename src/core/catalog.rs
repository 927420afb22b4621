// src/core/catalog.rs - Catalog Entities
//! Catalog entities: users, restaurants, and menu items.
//!
//! Field constraints are enforced at construction time so an entity that
//! exists is always valid. Constructors return [`Error::InvalidInput`]
//! with a message naming the offending field.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::types::{MenuItemId, RestaurantId, UserId};
use crate::{Error, Result};

/// A customer of the delivery service.
///
/// Referenced by orders as the customer; never mutated by the ordering
/// workflow itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Email address, unique per store
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Delivery address
    pub address: String,
}

impl User {
    /// Create a user, validating every field.
    pub fn new(name: &str, email: &str, phone: &str, address: &str) -> Result<Self> {
        validate_non_blank(name, 100, "Name")?;
        validate_email(email)?;
        validate_non_blank(phone, 15, "Phone number")?;
        validate_non_blank(address, 255, "Address")?;

        Ok(Self {
            id: UserId::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
        })
    }
}

/// A restaurant offering menu items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Unique restaurant ID
    pub id: RestaurantId,
    /// Restaurant name
    pub name: String,
    /// Street address
    pub address: String,
    /// Cuisine label, e.g. "Italian"
    pub cuisine: String,
}

impl Restaurant {
    /// Create a restaurant, validating every field.
    pub fn new(name: &str, address: &str, cuisine: &str) -> Result<Self> {
        validate_non_blank(name, 100, "Name")?;
        validate_non_blank(address, 255, "Address")?;
        validate_non_blank(cuisine, 50, "Cuisine")?;

        Ok(Self {
            id: RestaurantId::new_v4(),
            name: name.to_string(),
            address: address.to_string(),
            cuisine: cuisine.to_string(),
        })
    }
}

/// A single item on a restaurant's menu.
///
/// The price recorded here is read at order-placement time and snapshotted
/// into the order line; later price edits never reprice placed orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique menu item ID
    pub id: MenuItemId,
    /// Item name, 1-100 characters
    pub name: String,
    /// Optional description, up to 255 characters
    pub description: Option<String>,
    /// Unit price, strictly positive
    pub price: Decimal,
    /// Owning restaurant
    pub restaurant_id: RestaurantId,
}

impl MenuItem {
    /// Create a menu item, validating name, description, and price.
    pub fn new(
        name: &str,
        description: Option<&str>,
        price: Decimal,
        restaurant_id: RestaurantId,
    ) -> Result<Self> {
        if name.is_empty() || name.chars().count() > 100 {
            return Err(Error::InvalidInput(
                "Name must be between 1 and 100 characters".to_string(),
            ));
        }
        if let Some(desc) = description {
            if desc.chars().count() > 255 {
                return Err(Error::InvalidInput(
                    "Description must be less than 255 characters".to_string(),
                ));
            }
        }
        if price <= Decimal::ZERO {
            return Err(Error::InvalidInput(
                "Price must be a positive value".to_string(),
            ));
        }

        Ok(Self {
            id: MenuItemId::new_v4(),
            name: name.to_string(),
            description: description.map(ToString::to_string),
            price,
            restaurant_id,
        })
    }
}

fn validate_non_blank(value: &str, max_len: usize, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{field} cannot be blank")));
    }
    if value.chars().count() > max_len {
        return Err(Error::InvalidInput(format!(
            "{field} must be less than {max_len} characters"
        )));
    }
    Ok(())
}

/// Minimal email shape check: non-empty local part, one `@`, and a domain
/// containing a dot.
fn validate_email(email: &str) -> Result<()> {
    validate_non_blank(email, 254, "Email")?;

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidInput("Email should be valid".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn user_requires_valid_email() {
        assert!(User::new("Ada", "ada@example.com", "555-0100", "1 Main St").is_ok());

        for bad in ["", "not-an-email", "@example.com", "ada@", "ada@nodot", "a b@example.com"] {
            let err = User::new("Ada", bad, "555-0100", "1 Main St").unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "accepted {bad:?}");
        }
    }

    #[test]
    fn user_rejects_blank_fields() {
        assert!(User::new("", "ada@example.com", "555-0100", "1 Main St").is_err());
        assert!(User::new("Ada", "ada@example.com", "  ", "1 Main St").is_err());
        assert!(User::new("Ada", "ada@example.com", "555-0100", "").is_err());
    }

    #[test]
    fn restaurant_field_limits() {
        assert!(Restaurant::new("Trattoria", "2 Side St", "Italian").is_ok());
        assert!(Restaurant::new("", "2 Side St", "Italian").is_err());
        assert!(Restaurant::new("Trattoria", "2 Side St", &"x".repeat(51)).is_err());
    }

    #[test]
    fn menu_item_price_must_be_positive() {
        let restaurant = RestaurantId::new_v4();

        assert!(MenuItem::new("Margherita", None, dec!(9.99), restaurant).is_ok());

        let err = MenuItem::new("Margherita", None, dec!(0), restaurant).unwrap_err();
        assert!(err.to_string().contains("positive"));

        let err = MenuItem::new("Margherita", None, dec!(-1.50), restaurant).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn menu_item_name_and_description_limits() {
        let restaurant = RestaurantId::new_v4();

        assert!(MenuItem::new("", None, dec!(1), restaurant).is_err());
        assert!(MenuItem::new(&"x".repeat(101), None, dec!(1), restaurant).is_err());
        assert!(MenuItem::new("Pizza", Some(&"d".repeat(256)), dec!(1), restaurant).is_err());
        assert!(MenuItem::new("Pizza", Some("wood-fired"), dec!(1), restaurant).is_ok());
    }
}

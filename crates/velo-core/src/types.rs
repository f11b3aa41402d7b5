//! # Domain Types
//!
//! Core domain types used throughout the Velo Shop client layer.
//!
//! ## Snapshot Discipline
//! The cart never holds live references into the catalog. Whatever a
//! [`Bicycle`] looks like at the moment it is added is what the cart line
//! keeps: later catalog edits (price changes, restocks) do not reach back
//! into an open cart.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Bicycle
// =============================================================================

/// A bicycle as presented by the product catalog.
///
/// This is the product-shaped *input* to the cart: the catalog component
/// outside this workspace produces it, the cart snapshots the fields it
/// needs and forgets the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bicycle {
    /// Opaque catalog identifier (the backend uses ObjectID hex strings).
    pub id: String,

    /// Display model name shown in cart and order views.
    pub model_name: String,

    /// Display brand name.
    pub brand: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Display image location.
    pub image_url: String,

    /// Available stock at the time the catalog produced this value.
    /// Advisory only; the cart never enforces it.
    pub stock_quantity: i64,
}

impl Bicycle {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// One line of an order submission payload.
///
/// Projected from a cart line by [`crate::Cart::order_items`]; carries only
/// what the order endpoint needs to re-resolve the product server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub bicycle_id: String,
    pub quantity: i64,
    pub selected_customizations: Vec<String>,
}

// =============================================================================
// User & Role
// =============================================================================

/// Access role of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Back-office access (catalog management, all orders).
    Admin,
    /// Regular shopper.
    Customer,
}

impl Default for Role {
    fn default() -> Self {
        Role::Customer
    }
}

/// The profile of an authenticated user, as returned by the account
/// endpoint and held by the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Checks whether this user holds the admin role.
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bicycle_price() {
        let bicycle = Bicycle {
            id: "b-1".to_string(),
            model_name: "Gravel One".to_string(),
            brand: "Velo".to_string(),
            price_cents: 129_900,
            image_url: "/img/gravel-one.jpg".to_string(),
            stock_quantity: 4,
        };
        assert_eq!(bicycle.price(), Money::from_cents(129_900));
    }

    #[test]
    fn test_role_default() {
        assert_eq!(Role::default(), Role::Customer);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"admin\"");

        let back: Role = serde_json::from_str("\"customer\"").unwrap();
        assert_eq!(back, Role::Customer);
    }

    #[test]
    fn test_user_is_admin() {
        let user = User {
            id: "u-1".to_string(),
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            role: Role::Admin,
        };
        assert!(user.is_admin());
    }
}

//! Shopping cart records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;
use super::Product;

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CartItem {
    /// The cart item ID, used by update and remove calls.
    pub id: u64,

    /// The owning cart.
    #[serde(default)]
    pub cart_id: u64,

    /// The product in this line.
    pub product_id: u64,

    /// Units of the product.
    pub quantity: u32,

    /// The full product record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

impl CartItem {
    /// Returns unit price times quantity, or `None` if the product was not embedded.
    #[must_use]
    pub fn subtotal(&self) -> Option<f64> {
        self.product
            .as_ref()
            .map(|product| product.price * f64::from(self.quantity))
    }
}

/// The signed-in user's cart.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Cart {
    /// The cart ID.
    pub id: u64,

    /// The owning user.
    #[serde(default)]
    pub user_id: u64,

    /// Last modification time.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub updated_at: Option<DateTime<Utc>>,

    /// Lines in the cart.
    #[serde(default)]
    pub items: Vec<CartItem>,

    /// Total as computed by the backend.
    #[serde(default)]
    pub total: f64,
}

impl Cart {
    /// Returns the total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Returns `true` if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Body of `POST /api/cart/items`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCartItem {
    /// The product to add.
    pub product_id: u64,
    /// Units to add.
    pub quantity: u32,
}

/// Body of `PUT /api/cart/items/{id}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItemUpdate {
    /// The new quantity for the line.
    pub quantity: u32,
}

/// Acknowledgement returned by cart mutations.
///
/// The backend answers adds and updates with a short message object rather
/// than the affected line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CartAck {
    /// Human-readable confirmation (e.g. "Item added to cart").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

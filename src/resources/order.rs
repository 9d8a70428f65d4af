//! Order records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, awaiting payment confirmation.
    #[default]
    Pending,
    /// Payment confirmed.
    Confirmed,
    /// Being prepared.
    Processing,
    /// Handed to the carrier.
    Shipped,
    /// Received by the customer.
    Delivered,
    /// Cancelled.
    Cancelled,
}

impl OrderStatus {
    /// Returns `true` for states that will not change any more.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

/// A line of an order, priced at the time of purchase.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderItem {
    /// The order item ID.
    #[serde(default)]
    pub id: u64,

    /// The owning order.
    #[serde(default)]
    pub order_id: u64,

    /// The purchased product.
    pub product_id: u64,

    /// Units purchased.
    pub quantity: u32,

    /// Price per unit when the order was placed.
    pub unit_price: f64,

    /// `unit_price * quantity`.
    pub subtotal: f64,
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    /// The order ID.
    pub id: u64,

    /// The ordering user.
    #[serde(default)]
    pub user_id: u64,

    /// When the order was placed.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub order_date: Option<DateTime<Utc>>,

    /// Current state.
    #[serde(default)]
    pub status: OrderStatus,

    /// Order total in USD.
    pub total_amount: f64,

    /// The payment method chosen at checkout.
    pub payment_method_id: u64,

    /// Delivery address.
    pub shipping_address: String,

    /// Uploaded bank-transfer receipt, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_receipt: Option<String>,

    /// Purchased lines.
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// Body of `POST /api/orders/`. The order is built from the current cart.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NewOrder {
    /// The payment method to use.
    pub payment_method_id: u64,

    /// Delivery address.
    pub shipping_address: String,

    /// Bank-transfer receipt reference, if already available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_receipt: Option<String>,
}

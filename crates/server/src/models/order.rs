//! Order and order-item domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use adorly_core::{OrderId, OrderItemId, OrderStatus, ProductId};

/// Display name substituted when an ordered product no longer exists in the
/// catalog at write time.
pub const MISSING_PRODUCT_NAME: &str = "Product";

/// A placed order with its owned line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID, monotonically assigned.
    pub id: OrderId,
    /// Owning user's external identity ID.
    pub user_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    /// The only mutable field after creation; admin-only.
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    /// Owning user's username, populated only in the admin listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// A line item owned by an order.
///
/// `price` and `product_name` are snapshots taken at order time; later
/// catalog edits do not affect them. This keeps order history stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub product_name: String,
}

/// A line item as submitted by the client when placing an order.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrderItem {
    pub product_id: ProductId,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

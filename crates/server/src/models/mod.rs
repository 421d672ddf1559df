//! Domain types for the Adorly Market API.
//!
//! These types double as the JSON wire representations: the storefront UI
//! consumes them directly, so field names and formats are part of the
//! public contract.

pub mod order;
pub mod product;
pub mod user;

pub use order::{NewOrderItem, Order, OrderItem};
pub use product::{NewProduct, Product};
pub use user::UserIdentity;

//! Core types for Adorly Market.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod role;
pub mod status;

pub use category::{Category, CategoryParseError};
pub use id::*;
pub use role::Role;
pub use status::{OrderStatus, OrderStatusParseError};

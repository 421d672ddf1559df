//! Storage layer: one interface, two backends.
//!
//! The HTTP surface and business logic are storage-agnostic; they talk to
//! [`Store`], which dispatches to either the persistent `SQLite` backend or
//! the ephemeral in-process backend. Which one is active is decided once at
//! startup from configuration.
//!
//! # Atomicity
//!
//! Two operations need stronger-than-best-effort guarantees and get them in
//! both backends:
//!
//! - **Order creation** writes the order row and all item rows as one unit,
//!   so a reader never observes an order with zero items.
//! - **Identity bootstrap** ("first user becomes admin") is a single
//!   check-and-set, not a read-then-write pair, so two simultaneous first
//!   syncs cannot both claim the admin slot.

pub mod memory;
pub mod seed;
pub mod sqlite;

use rust_decimal::Decimal;
use thiserror::Error;

use adorly_core::{OrderId, OrderStatus, ProductId};

use crate::models::{NewOrderItem, NewProduct, Order, Product, UserIdentity};

pub use memory::MemoryStore;
pub use seed::fallback_products;
pub use sqlite::SqliteStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,
}

/// The storage backend in use for this process.
///
/// Cheaply cloneable: both variants hold their state behind an `Arc`.
#[derive(Clone)]
pub enum Store {
    /// Persistent relational storage (`SQLite` via sqlx).
    Sqlite(SqliteStore),
    /// Ephemeral in-process storage, seeded with the fallback catalog.
    Memory(MemoryStore),
}

impl Store {
    /// List all products in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the underlying read fails. Callers on the
    /// public read path degrade to [`fallback_products`] instead of
    /// surfacing this.
    pub async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        match self {
            Self::Sqlite(s) => s.list_products().await,
            Self::Memory(m) => Ok(m.list_products().await),
        }
    }

    /// Create a product and return its newly assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub async fn create_product(&self, fields: NewProduct) -> Result<ProductId, StoreError> {
        match self {
            Self::Sqlite(s) => s.create_product(&fields).await,
            Self::Memory(m) => Ok(m.create_product(fields).await),
        }
    }

    /// Replace all mutable fields of a product.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no product has this ID.
    pub async fn update_product(
        &self,
        id: ProductId,
        fields: NewProduct,
    ) -> Result<(), StoreError> {
        match self {
            Self::Sqlite(s) => s.update_product(id, &fields).await,
            Self::Memory(m) => m.update_product(id, fields).await,
        }
    }

    /// Delete a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no product has this ID.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), StoreError> {
        match self {
            Self::Sqlite(s) => s.delete_product(id).await,
            Self::Memory(m) => m.delete_product(id).await,
        }
    }

    /// Idempotent upsert of a user identity.
    ///
    /// Creates the identity if it does not exist; the first identity ever
    /// created in this store receives the admin role, every later one the
    /// user role. Re-syncing an existing ID returns it unchanged.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub async fn sync_user(&self, id: &str, username: &str) -> Result<UserIdentity, StoreError> {
        match self {
            Self::Sqlite(s) => s.sync_user(id, username).await,
            Self::Memory(m) => Ok(m.sync_user(id, username).await),
        }
    }

    /// Create an order with its items and return the new order ID.
    ///
    /// Item product names are denormalized from the catalog at write time;
    /// a missing product yields the generic placeholder name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails; no partial order is left
    /// visible in that case.
    pub async fn create_order(
        &self,
        user_id: &str,
        items: &[NewOrderItem],
        total_price: Decimal,
    ) -> Result<OrderId, StoreError> {
        match self {
            Self::Sqlite(s) => s.create_order(user_id, items, total_price).await,
            Self::Memory(m) => Ok(m.create_order(user_id, items, total_price).await),
        }
    }

    /// List orders owned by one user, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read fails.
    pub async fn orders_for_user(&self, user_id: &str) -> Result<Vec<Order>, StoreError> {
        match self {
            Self::Sqlite(s) => s.orders_for_user(user_id).await,
            Self::Memory(m) => Ok(m.orders_for_user(user_id).await),
        }
    }

    /// List every order, each joined with the owning user's username.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read fails.
    pub async fn all_orders(&self) -> Result<Vec<Order>, StoreError> {
        match self {
            Self::Sqlite(s) => s.all_orders().await,
            Self::Memory(m) => Ok(m.all_orders().await),
        }
    }

    /// Overwrite an order's status. Any status value is accepted; there is
    /// no transition validation.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no order has this ID.
    pub async fn set_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<(), StoreError> {
        match self {
            Self::Sqlite(s) => s.set_order_status(id, status).await,
            Self::Memory(m) => m.set_order_status(id, status).await,
        }
    }

    /// Readiness probe: verifies the backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be reached.
    pub async fn ping(&self) -> Result<(), StoreError> {
        match self {
            Self::Sqlite(s) => s.ping().await,
            Self::Memory(_) => Ok(()),
        }
    }
}

//! Persistent `SQLite` storage via sqlx.
//!
//! Prices are stored as TEXT for a lossless `Decimal` round-trip;
//! timestamps as RFC 3339 TEXT (decoded through sqlx's chrono support).
//! Multi-row writes (order + items) run inside a single transaction.

use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use secrecy::ExposeSecret;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use adorly_core::{Category, OrderId, OrderStatus, ProductId, Role};

use super::StoreError;
use crate::models::order::MISSING_PRODUCT_NAME;
use crate::models::{NewOrderItem, NewProduct, Order, OrderItem, Product, UserIdentity};

/// Create a `SQLite` connection pool with sensible defaults.
///
/// The database file is created if missing; foreign keys are enforced.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url.expose_secret())?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// `SQLite`-backed store.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: String,
    image_url: String,
    category: String,
}

impl TryFrom<ProductRow> for Product {
    type Error = StoreError;

    fn try_from(row: ProductRow) -> Result<Self, StoreError> {
        let price = Decimal::from_str(&row.price)
            .map_err(|e| StoreError::DataCorruption(format!("invalid price in database: {e}")))?;
        let category = row.category.parse::<Category>().map_err(|e| {
            StoreError::DataCorruption(format!("invalid category in database: {e}"))
        })?;

        Ok(Self {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            price,
            image_url: row.image_url,
            category,
        })
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    user_id: String,
    total_price: String,
    status: String,
    created_at: DateTime<Utc>,
    username: Option<String>,
}

impl TryFrom<OrderRow> for Order {
    type Error = StoreError;

    fn try_from(row: OrderRow) -> Result<Self, StoreError> {
        let total_price = Decimal::from_str(&row.total_price).map_err(|e| {
            StoreError::DataCorruption(format!("invalid total_price in database: {e}"))
        })?;
        let status = row
            .status
            .parse::<OrderStatus>()
            .map_err(|e| StoreError::DataCorruption(format!("invalid status in database: {e}")))?;

        Ok(Self {
            id: OrderId::new(row.id),
            user_id: row.user_id,
            total_price,
            status,
            created_at: row.created_at,
            items: Vec::new(),
            username: row.username,
        })
    }
}

#[derive(sqlx::FromRow)]
struct OrderItemRow {
    id: i64,
    order_id: i64,
    product_id: i64,
    quantity: i64,
    price: String,
    product_name: String,
}

impl TryFrom<OrderItemRow> for OrderItem {
    type Error = StoreError;

    fn try_from(row: OrderItemRow) -> Result<Self, StoreError> {
        let price = Decimal::from_str(&row.price).map_err(|e| {
            StoreError::DataCorruption(format!("invalid item price in database: {e}"))
        })?;

        Ok(Self {
            id: row.id.into(),
            order_id: OrderId::new(row.order_id),
            product_id: ProductId::new(row.product_id),
            quantity: row.quantity,
            price,
            product_name: row.product_name,
        })
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    username: String,
    role: String,
}

impl TryFrom<UserRow> for UserIdentity {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, StoreError> {
        let role = row
            .role
            .parse::<Role>()
            .map_err(|e| StoreError::DataCorruption(format!("invalid role in database: {e}")))?;

        Ok(Self {
            id: row.id,
            username: row.username,
            role,
        })
    }
}

impl SqliteStore {
    /// Wrap an existing pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub(super) async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            "SELECT id, name, description, price, image_url, category
             FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    pub(super) async fn create_product(
        &self,
        fields: &NewProduct,
    ) -> Result<ProductId, StoreError> {
        let result = sqlx::query(
            "INSERT INTO products (name, description, price, image_url, category)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.price.to_string())
        .bind(&fields.image_url)
        .bind(fields.category.as_str())
        .execute(&self.pool)
        .await?;

        Ok(ProductId::new(result.last_insert_rowid()))
    }

    pub(super) async fn update_product(
        &self,
        id: ProductId,
        fields: &NewProduct,
    ) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE products
             SET name = ?, description = ?, price = ?, image_url = ?, category = ?
             WHERE id = ?",
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.price.to_string())
        .bind(&fields.image_url)
        .bind(fields.category.as_str())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    pub(super) async fn delete_product(&self, id: ProductId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Idempotent upsert. The admin-slot claim is a single INSERT whose role
    /// is computed inside the statement, so it cannot race with itself.
    pub(super) async fn sync_user(
        &self,
        id: &str,
        username: &str,
    ) -> Result<UserIdentity, StoreError> {
        sqlx::query(
            "INSERT INTO users (id, username, role)
             VALUES (?, ?, CASE WHEN (SELECT COUNT(*) FROM users) = 0
                                THEN 'admin' ELSE 'user' END)
             ON CONFLICT(id) DO NOTHING",
        )
        .bind(id)
        .bind(username)
        .execute(&self.pool)
        .await?;

        let row: UserRow = sqlx::query_as("SELECT id, username, role FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        row.try_into()
    }

    pub(super) async fn create_order(
        &self,
        user_id: &str,
        items: &[NewOrderItem],
        total_price: Decimal,
    ) -> Result<OrderId, StoreError> {
        let mut tx = self.pool.begin().await?;

        let created_at = Utc::now();
        let result = sqlx::query(
            "INSERT INTO orders (user_id, total_price, status, created_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(total_price.to_string())
        .bind(OrderStatus::Pending.as_str())
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

        let order_id = result.last_insert_rowid();

        for item in items {
            // Snapshot the product name at write time; catalog edits after
            // this point must not rewrite order history.
            let name: Option<(String,)> =
                sqlx::query_as("SELECT name FROM products WHERE id = ?")
                    .bind(item.product_id)
                    .fetch_optional(&mut *tx)
                    .await?;
            let product_name =
                name.map_or_else(|| MISSING_PRODUCT_NAME.to_owned(), |(name,)| name);

            sqlx::query(
                "INSERT INTO order_items (order_id, product_id, quantity, price, product_name)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.price.to_string())
            .bind(&product_name)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(OrderId::new(order_id))
    }

    pub(super) async fn orders_for_user(&self, user_id: &str) -> Result<Vec<Order>, StoreError> {
        let rows: Vec<OrderRow> = sqlx::query_as(
            "SELECT id, user_id, total_price, status, created_at, NULL AS username
             FROM orders WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        self.attach_items(rows).await
    }

    pub(super) async fn all_orders(&self) -> Result<Vec<Order>, StoreError> {
        let rows: Vec<OrderRow> = sqlx::query_as(
            "SELECT o.id, o.user_id, o.total_price, o.status, o.created_at, u.username
             FROM orders o
             LEFT JOIN users u ON u.id = o.user_id
             ORDER BY o.id",
        )
        .fetch_all(&self.pool)
        .await?;

        self.attach_items(rows).await
    }

    pub(super) async fn set_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE orders SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    pub(super) async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    async fn attach_items(&self, rows: Vec<OrderRow>) -> Result<Vec<Order>, StoreError> {
        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            let mut order = Order::try_from(row)?;
            let item_rows: Vec<OrderItemRow> = sqlx::query_as(
                "SELECT id, order_id, product_id, quantity, price, product_name
                 FROM order_items WHERE order_id = ? ORDER BY id",
            )
            .bind(order.id)
            .fetch_all(&self.pool)
            .await?;

            order.items = item_rows
                .into_iter()
                .map(OrderItem::try_from)
                .collect::<Result<_, _>>()?;
            orders.push(order);
        }
        Ok(orders)
    }
}

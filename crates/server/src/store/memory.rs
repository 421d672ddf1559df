//! Ephemeral in-process storage.
//!
//! Holds the catalog, identities, and the order ledger in plain vectors
//! behind one `RwLock`. Created at process start and owned by the
//! application state; nothing here outlives the process.
//!
//! The write guard doubles as the atomicity boundary: identity bootstrap
//! and order-plus-items insertion each happen under a single write lock,
//! so readers never observe a half-written order and only one identity can
//! ever claim the admin slot.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use adorly_core::{OrderId, OrderItemId, OrderStatus, ProductId, Role};

use super::StoreError;
use super::seed::fallback_products;
use crate::models::order::MISSING_PRODUCT_NAME;
use crate::models::{NewOrderItem, NewProduct, Order, OrderItem, Product, UserIdentity};

#[derive(Debug)]
struct Inner {
    products: Vec<Product>,
    users: Vec<UserIdentity>,
    orders: Vec<Order>,
    next_product_id: i64,
    next_order_id: i64,
    next_item_id: i64,
}

/// In-memory store, seeded with the fallback catalog.
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a fresh store seeded with the fallback catalog.
    #[must_use]
    pub fn new() -> Self {
        let products = fallback_products();
        let next_product_id = products.len() as i64 + 1;

        Self {
            inner: Arc::new(RwLock::new(Inner {
                products,
                users: Vec::new(),
                orders: Vec::new(),
                next_product_id,
                next_order_id: 1,
                next_item_id: 1,
            })),
        }
    }

    /// Create a fresh store with an empty catalog (no seed data).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                products: Vec::new(),
                users: Vec::new(),
                orders: Vec::new(),
                next_product_id: 1,
                next_order_id: 1,
                next_item_id: 1,
            })),
        }
    }

    pub async fn list_products(&self) -> Vec<Product> {
        self.inner.read().await.products.clone()
    }

    pub async fn create_product(&self, fields: NewProduct) -> ProductId {
        let mut inner = self.inner.write().await;
        let id = ProductId::new(inner.next_product_id);
        inner.next_product_id += 1;
        inner.products.push(fields.into_product(id));
        id
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no product has this ID.
    pub async fn update_product(
        &self,
        id: ProductId,
        fields: NewProduct,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let product = inner
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;
        *product = fields.into_product(id);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no product has this ID.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.products.len();
        inner.products.retain(|p| p.id != id);
        if inner.products.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Idempotent upsert; the write lock makes the first-admin check-and-set
    /// atomic.
    pub async fn sync_user(&self, id: &str, username: &str) -> UserIdentity {
        let mut inner = self.inner.write().await;

        if let Some(existing) = inner.users.iter().find(|u| u.id == id) {
            return existing.clone();
        }

        let role = if inner.users.is_empty() {
            Role::Admin
        } else {
            Role::User
        };
        let user = UserIdentity {
            id: id.to_owned(),
            username: username.to_owned(),
            role,
        };
        inner.users.push(user.clone());
        user
    }

    /// Insert the order and all its items under one write lock.
    pub async fn create_order(
        &self,
        user_id: &str,
        items: &[NewOrderItem],
        total_price: Decimal,
    ) -> OrderId {
        let mut inner = self.inner.write().await;

        let order_id = OrderId::new(inner.next_order_id);
        inner.next_order_id += 1;

        let mut order_items = Vec::with_capacity(items.len());
        for item in items {
            let id = OrderItemId::new(inner.next_item_id);
            inner.next_item_id += 1;
            let product_name = inner
                .products
                .iter()
                .find(|p| p.id == item.product_id)
                .map_or_else(|| MISSING_PRODUCT_NAME.to_owned(), |p| p.name.clone());
            order_items.push(OrderItem {
                id,
                order_id,
                product_id: item.product_id,
                quantity: item.quantity,
                price: item.price,
                product_name,
            });
        }

        inner.orders.push(Order {
            id: order_id,
            user_id: user_id.to_owned(),
            total_price,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            items: order_items,
            username: None,
        });

        order_id
    }

    pub async fn orders_for_user(&self, user_id: &str) -> Vec<Order> {
        self.inner
            .read()
            .await
            .orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect()
    }

    pub async fn all_orders(&self) -> Vec<Order> {
        let inner = self.inner.read().await;
        inner
            .orders
            .iter()
            .map(|order| {
                let username = inner
                    .users
                    .iter()
                    .find(|u| u.id == order.user_id)
                    .map(|u| u.username.clone());
                Order {
                    username,
                    ..order.clone()
                }
            })
            .collect()
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no order has this ID.
    pub async fn set_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let order = inner
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(StoreError::NotFound)?;
        order.status = status;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use adorly_core::Category;

    fn new_product(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_owned(),
            description: "d".to_owned(),
            price: Decimal::new(1000, 2),
            image_url: "http://x".to_owned(),
            category: Category::Phone,
        }
    }

    #[tokio::test]
    async fn test_seeded_catalog() {
        let store = MemoryStore::new();
        assert_eq!(store.list_products().await.len(), 16);
    }

    #[tokio::test]
    async fn test_first_user_is_admin_rest_are_users() {
        let store = MemoryStore::new();

        let alice = store.sync_user("ext-alice", "alice").await;
        let bob = store.sync_user("ext-bob", "bob").await;
        let carol = store.sync_user("ext-carol", "carol").await;

        assert_eq!(alice.role, Role::Admin);
        assert_eq!(bob.role, Role::User);
        assert_eq!(carol.role, Role::User);
    }

    #[tokio::test]
    async fn test_resync_never_changes_role() {
        let store = MemoryStore::new();

        let first = store.sync_user("ext-1", "one").await;
        let again = store.sync_user("ext-1", "one").await;
        assert_eq!(first, again);
        assert_eq!(again.role, Role::Admin);

        let second = store.sync_user("ext-2", "two").await;
        let second_again = store.sync_user("ext-2", "two").await;
        assert_eq!(second.role, Role::User);
        assert_eq!(second_again.role, Role::User);
    }

    #[tokio::test]
    async fn test_resync_never_changes_username() {
        let store = MemoryStore::new();

        store.sync_user("ext-1", "one").await;
        let renamed = store.sync_user("ext-1", "renamed").await;
        assert_eq!(renamed.username, "one");
    }

    #[tokio::test]
    async fn test_product_create_list_delete_roundtrip() {
        let store = MemoryStore::empty();

        let id = store.create_product(new_product("X")).await;
        let products = store.list_products().await;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, id);
        assert_eq!(products[0].name, "X");

        store.delete_product(id).await.unwrap();
        assert!(store.list_products().await.is_empty());
    }

    #[tokio::test]
    async fn test_update_product_replaces_fields() {
        let store = MemoryStore::empty();
        let id = store.create_product(new_product("Before")).await;

        store.update_product(id, new_product("After")).await.unwrap();
        let products = store.list_products().await;
        assert_eq!(products[0].name, "After");
    }

    #[tokio::test]
    async fn test_update_delete_absent_product_is_not_found() {
        let store = MemoryStore::empty();
        let id = ProductId::new(99);
        assert!(matches!(
            store.update_product(id, new_product("X")).await,
            Err(StoreError::NotFound)
        ));
        assert!(matches!(
            store.delete_product(id).await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_order_roundtrip_preserves_items_and_total() {
        let store = MemoryStore::new();
        store.sync_user("ext-u", "u").await;

        let items = vec![
            NewOrderItem {
                product_id: ProductId::new(1),
                quantity: 2,
                price: Decimal::new(8500, 2),
            },
            NewOrderItem {
                product_id: ProductId::new(13),
                quantity: 1,
                price: Decimal::new(12900, 2),
            },
        ];
        let total = Decimal::new(29900, 2);

        let id = store.create_order("ext-u", &items, total).await;
        let orders = store.orders_for_user("ext-u").await;

        assert_eq!(orders.len(), 1);
        let order = &orders[0];
        assert_eq!(order.id, id);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.total_price, total);
        assert_eq!(order.status, OrderStatus::Pending);
        // Names were snapshotted from the seeded catalog
        assert_eq!(order.items[0].product_name, "Rose Elegance");
        assert_eq!(order.items[1].product_name, "Wireless Earbuds");
    }

    #[tokio::test]
    async fn test_order_item_name_placeholder_for_missing_product() {
        let store = MemoryStore::empty();
        let items = vec![NewOrderItem {
            product_id: ProductId::new(404),
            quantity: 1,
            price: Decimal::ONE,
        }];

        store.create_order("ext-u", &items, Decimal::ONE).await;
        let orders = store.orders_for_user("ext-u").await;
        assert_eq!(orders[0].items[0].product_name, MISSING_PRODUCT_NAME);
    }

    #[tokio::test]
    async fn test_orders_scoped_to_user() {
        let store = MemoryStore::new();
        let items = vec![NewOrderItem {
            product_id: ProductId::new(1),
            quantity: 1,
            price: Decimal::ONE,
        }];

        store.create_order("ext-a", &items, Decimal::ONE).await;
        store.create_order("ext-b", &items, Decimal::ONE).await;

        assert_eq!(store.orders_for_user("ext-a").await.len(), 1);
        assert_eq!(store.orders_for_user("ext-b").await.len(), 1);
        assert_eq!(store.all_orders().await.len(), 2);
    }

    #[tokio::test]
    async fn test_all_orders_carry_username() {
        let store = MemoryStore::new();
        store.sync_user("ext-a", "alice").await;
        let items = vec![NewOrderItem {
            product_id: ProductId::new(1),
            quantity: 1,
            price: Decimal::ONE,
        }];
        store.create_order("ext-a", &items, Decimal::ONE).await;

        let all = store.all_orders().await;
        assert_eq!(all[0].username.as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_status_overwrite_without_transition_validation() {
        let store = MemoryStore::new();
        let items = vec![NewOrderItem {
            product_id: ProductId::new(1),
            quantity: 1,
            price: Decimal::ONE,
        }];
        let id = store.create_order("ext-a", &items, Decimal::ONE).await;

        // delivered -> pending is permitted; any value sticks verbatim
        store.set_order_status(id, OrderStatus::Delivered).await.unwrap();
        store.set_order_status(id, OrderStatus::Pending).await.unwrap();

        let all = store.all_orders().await;
        assert_eq!(all[0].status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_set_status_absent_order_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store
                .set_order_status(OrderId::new(7), OrderStatus::Shipped)
                .await,
            Err(StoreError::NotFound)
        ));
    }
}

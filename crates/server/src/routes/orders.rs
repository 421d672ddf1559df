//! Order ledger route handlers.
//!
//! Orders are created by an authenticated user for themselves only: the
//! owner is always the verified bearer identity, never a client-supplied
//! field. Status changes and the global listing are admin-only.

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use adorly_core::{OrderId, OrderStatus};

use super::SuccessResponse;
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdmin, RequireAuth};
use crate::models::{NewOrderItem, Order};
use crate::state::AppState;

/// Request body for `POST /api/orders`.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Vec<NewOrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

/// Request body for `PATCH /api/orders/{id}/status`.
///
/// Any valid status enum value is accepted; there is no transition
/// validation (`delivered -> pending` is permitted).
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: OrderStatus,
}

/// Response body for order creation.
#[derive(Debug, Serialize)]
pub struct CreatedOrder {
    pub id: OrderId,
}

/// Place an order for the authenticated caller.
///
/// # Errors
///
/// Returns `AppError::Validation` for an empty item list, a non-positive
/// quantity, or a negative price; `AppError::Store` if the write fails.
pub async fn create(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<Json<CreatedOrder>> {
    if body.items.is_empty() {
        return Err(AppError::Validation(
            "order must contain at least one item".to_string(),
        ));
    }
    for item in &body.items {
        if item.quantity < 1 {
            return Err(AppError::Validation(
                "item quantity must be at least 1".to_string(),
            ));
        }
        if item.price < Decimal::ZERO {
            return Err(AppError::Validation(
                "item price must not be negative".to_string(),
            ));
        }
    }
    if body.total_price < Decimal::ZERO {
        return Err(AppError::Validation(
            "total_price must not be negative".to_string(),
        ));
    }

    let id = state
        .store()
        .create_order(&user.id, &body.items, body.total_price)
        .await?;

    tracing::info!(order_id = %id, user_id = %user.id, items = body.items.len(), "order placed");

    Ok(Json(CreatedOrder { id }))
}

/// List the authenticated caller's own orders.
///
/// # Errors
///
/// Returns `AppError::Store` if the read fails.
pub async fn list_mine(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>> {
    let orders = state.store().orders_for_user(&user.id).await?;
    Ok(Json(orders))
}

/// List every order, joined with the owning user's username.
///
/// # Errors
///
/// Returns `AppError::Store` if the read fails.
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>> {
    let orders = state.store().all_orders().await?;
    Ok(Json(orders))
}

/// Overwrite an order's status.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the ID does not exist.
pub async fn set_status(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<SetStatusRequest>,
) -> Result<Json<SuccessResponse>> {
    state
        .store()
        .set_order_status(OrderId::new(id), body.status)
        .await?;
    Ok(Json(SuccessResponse::OK))
}

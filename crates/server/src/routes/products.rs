//! Catalog route handlers.
//!
//! Reads are public and deliberately availability-first: if the storage
//! backend cannot be read, the fixed fallback catalog is served instead of
//! an error. All mutations require an admin bearer.

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use serde::Serialize;

use adorly_core::ProductId;

use super::SuccessResponse;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::{NewProduct, Product};
use crate::state::AppState;
use crate::store::fallback_products;

/// Response body for product creation.
#[derive(Debug, Serialize)]
pub struct CreatedProduct {
    pub id: ProductId,
}

/// List the full catalog in insertion order.
///
/// No pagination, filtering, or sorting: the UI filters client-side over
/// the complete result set.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Product>> {
    match state.store().list_products().await {
        Ok(products) => Json(products),
        Err(e) => {
            tracing::warn!(error = %e, "catalog read failed, serving fallback products");
            Json(fallback_products())
        }
    }
}

/// Create a product.
///
/// # Errors
///
/// Returns `AppError::Validation` for a negative price and `AppError::Store`
/// if the write fails.
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(fields): Json<NewProduct>,
) -> Result<Json<CreatedProduct>> {
    validate(&fields)?;
    let id = state.store().create_product(fields).await?;
    Ok(Json(CreatedProduct { id }))
}

/// Replace all fields of a product.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the ID does not exist.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(fields): Json<NewProduct>,
) -> Result<Json<SuccessResponse>> {
    validate(&fields)?;
    state
        .store()
        .update_product(ProductId::new(id), fields)
        .await?;
    Ok(Json(SuccessResponse::OK))
}

/// Delete a product by ID.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the ID does not exist.
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>> {
    state.store().delete_product(ProductId::new(id)).await?;
    Ok(Json(SuccessResponse::OK))
}

fn validate(fields: &NewProduct) -> Result<()> {
    if fields.price < Decimal::ZERO {
        return Err(AppError::Validation(
            "price must not be negative".to_string(),
        ));
    }
    if fields.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }
    Ok(())
}

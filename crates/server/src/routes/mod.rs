//! HTTP route handlers for the Adorly Market API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Liveness check
//! GET  /health/ready              - Readiness check (storage reachable)
//!
//! # Auth
//! POST /api/auth/sync             - Sync identity, issue bearer token
//!
//! # Products
//! GET    /api/products            - List catalog (public)
//! POST   /api/products            - Create product (bearer + admin)
//! PUT    /api/products/{id}       - Replace product (bearer + admin)
//! DELETE /api/products/{id}       - Delete product (bearer + admin)
//!
//! # Orders
//! POST  /api/orders               - Place order (bearer)
//! GET   /api/orders/my            - Caller's orders (bearer)
//! GET   /api/orders               - All orders w/ usernames (bearer + admin)
//! PATCH /api/orders/{id}/status   - Overwrite status (bearer + admin)
//! ```

pub mod auth;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, patch, post},
};
use serde::Serialize;

use crate::state::AppState;

/// Mutation acknowledgement body (`{"success": true}`).
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub(crate) const OK: Self = Self { success: true };
}

/// Create the API router (everything under `/api`).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/sync", post(auth::sync))
        .route(
            "/api/products",
            get(products::list).post(products::create),
        )
        .route(
            "/api/products/{id}",
            axum::routing::put(products::update).delete(products::delete),
        )
        .route("/api/orders", get(orders::list_all).post(orders::create))
        .route("/api/orders/my", get(orders::list_mine))
        .route("/api/orders/{id}/status", patch(orders::set_status))
}

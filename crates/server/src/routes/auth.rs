//! Identity sync route.
//!
//! The external identity provider hands the UI an `(id, username)` pair;
//! the UI posts it here and receives the stored identity plus a freshly
//! signed bearer token. The very first identity synced into a fresh store
//! becomes the admin; everyone after that is a regular user, and re-syncing
//! never changes an existing role.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::UserIdentity;
use crate::state::AppState;

/// Request body for `POST /api/auth/sync`.
#[derive(Debug, Deserialize)]
pub struct SyncRequest {
    /// External identity ID.
    pub id: String,
    pub username: String,
}

/// Response body: the identity and a fresh bearer token.
#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub token: String,
    pub user: UserIdentity,
}

/// Sync a user identity and issue a bearer token.
///
/// # Errors
///
/// Returns `AppError::Validation` for empty fields and `AppError::Store`
/// if the upsert fails.
pub async fn sync(
    State(state): State<AppState>,
    Json(body): Json<SyncRequest>,
) -> Result<Json<SyncResponse>> {
    if body.id.trim().is_empty() {
        return Err(AppError::Validation("id must not be empty".to_string()));
    }
    if body.username.trim().is_empty() {
        return Err(AppError::Validation(
            "username must not be empty".to_string(),
        ));
    }

    let user = state.store().sync_user(&body.id, &body.username).await?;
    let token = state.tokens().issue(&user)?;

    tracing::info!(user_id = %user.id, role = %user.role, "identity synced");

    Ok(Json(SyncResponse { token, user }))
}

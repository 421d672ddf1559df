//! Access guard extractors.
//!
//! Two checks, applied in fixed order in front of protected routes:
//!
//! 1. Token presence and validity - a missing `Authorization: Bearer` header
//!    yields 401; a malformed, forged, or expired token yields 403.
//! 2. Role equality - a valid bearer whose role is not `admin` yields 403 on
//!    admin-only routes.
//!
//! [`RequireAuth`] performs only the first check; [`RequireAdmin`] performs
//! both.
//!
//! # Example
//!
//! ```rust,ignore
//! async fn place_order(
//!     RequireAuth(user): RequireAuth,
//! ) -> impl IntoResponse {
//!     format!("order for {}", user.username)
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::auth::AuthedUser;
use crate::error::AppError;
use crate::state::AppState;

/// Extractor that requires a valid bearer token.
///
/// The verified claims are handed to the handler; the user ID inside them is
/// the only identity the handler may trust (never a client-supplied one).
pub struct RequireAuth(pub AuthedUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = authenticate(parts, state)?;
        Ok(Self(user))
    }
}

/// Extractor that requires a valid bearer token with the admin role.
pub struct RequireAdmin(pub AuthedUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = authenticate(parts, state)?;
        if !user.role.is_admin() {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }
        Ok(Self(user))
    }
}

/// Shared first gate: extract and verify the bearer token.
fn authenticate(parts: &Parts, state: &AppState) -> Result<AuthedUser, AppError> {
    let header_value = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthenticated("Missing bearer token".to_string()))?;

    let token = header_value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthenticated("Missing bearer token".to_string()))?;

    let claims = state.tokens().verify(token)?;
    Ok(AuthedUser::from(claims))
}

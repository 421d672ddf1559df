//! User identity domain type.

use serde::{Deserialize, Serialize};

use adorly_core::Role;

/// A user identity synced from the external identity provider.
///
/// The `id` is the provider's external identifier; this system never mints
/// its own user IDs. The role is assigned exactly once, at creation, and is
/// never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// External identity ID (unique).
    pub id: String,
    pub username: String,
    pub role: Role,
}

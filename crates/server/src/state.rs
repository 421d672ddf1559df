//! Application state shared across handlers.

use std::sync::Arc;

use crate::auth::TokenIssuer;
use crate::config::MarketConfig;
use crate::store::Store;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// storage backend, the token issuer, and configuration. It is created at
/// process start and torn down at process stop; no handler reaches for any
/// ambient module-level state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: MarketConfig,
    store: Store,
    tokens: TokenIssuer,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: MarketConfig, store: Store) -> Self {
        let tokens = TokenIssuer::new(&config.jwt_secret);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                tokens,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &MarketConfig {
        &self.inner.config
    }

    /// Get a reference to the storage backend.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    /// Get a reference to the bearer token issuer.
    #[must_use]
    pub fn tokens(&self) -> &TokenIssuer {
        &self.inner.tokens
    }
}

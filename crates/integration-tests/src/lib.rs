//! Integration tests for Adorly Market.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the server (memory store is fine)
//! MARKET_JWT_SECRET=$(openssl rand -hex 32) cargo run -p adorly-server
//!
//! # Run integration tests against it
//! cargo test -p adorly-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `auth_flow` - Token issuance and role bootstrap
//! - `product_catalog` - Public catalog and admin product management
//! - `order_flow` - Order placement, listing, and status tracking
//!
//! The target server is selected with `MARKET_BASE_URL`
//! (default `http://localhost:5000`).

//! Request middleware: access guard extractors.

pub mod auth;

pub use auth::{RequireAdmin, RequireAuth};

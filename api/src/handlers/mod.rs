//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod users;

pub use users::register_user;

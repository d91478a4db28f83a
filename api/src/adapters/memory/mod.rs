//! In-memory adapters
//!
//! Process-local store used for tests and for running without a database.

pub mod user_store;

pub use user_store::InMemoryUserStore;

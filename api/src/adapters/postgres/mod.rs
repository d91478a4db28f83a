//! PostgreSQL adapters
//!
//! Implementations of store traits using SeaORM and PostgreSQL.

pub mod user_store;


pub use user_store::PostgresUserStore;

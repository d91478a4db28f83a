//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod memory;
pub mod postgres;
pub mod user_repository;

pub use memory::InMemoryUserStore;
pub use postgres::PostgresUserStore;
pub use user_repository::UserRepositoryAdapter;

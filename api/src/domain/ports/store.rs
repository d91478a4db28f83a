//! Persistence store port
//!
//! The raw write path the repository adapter delegates to. Records never
//! cross the repository boundary; the mapper translates them first.

use async_trait::async_trait;

use crate::error::PersistenceError;

/// A row of the `users` table as the store sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Option<i64>,
    pub name: String,
}

/// Backing store for user records
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Write a record and return it with its store-assigned id
    ///
    /// Ids are unique for the lifetime of the store. Only the store assigns
    /// ids: a record that already carries one is `Rejected` without a write.
    async fn insert(&self, record: UserRecord) -> Result<UserRecord, PersistenceError>;
}

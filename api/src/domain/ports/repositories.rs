//! Repository port traits
//!
//! The interface the registration use case persists users through.
//! Implemented by `adapters::UserRepositoryAdapter`.

use async_trait::async_trait;

use crate::domain::entities::User;
use crate::dto::UserDto;
use crate::error::PersistenceError;

/// Repository for User entities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return its stored representation
    ///
    /// The user's `id` is expected to be unset; the backing store assigns one.
    async fn save(&self, user: User) -> Result<UserDto, PersistenceError>;
}

//! User registration use case

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::User;
use crate::domain::ports::UserRepository;
use crate::dto::UserDto;
use crate::error::PersistenceError;

/// Inbound port for registering users
#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    /// Register a user under `name`
    ///
    /// Names are not validated: an empty name is persisted as-is. Not
    /// idempotent, every call creates a new user with a fresh id.
    async fn register(&self, name: &str) -> Result<UserDto, PersistenceError>;
}

/// Service for registering users
pub struct RegisterUserService<R>
where
    R: UserRepository,
{
    users: Arc<R>,
}

impl<R> RegisterUserService<R>
where
    R: UserRepository,
{
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R> RegisterUserUseCase for RegisterUserService<R>
where
    R: UserRepository,
{
    async fn register(&self, name: &str) -> Result<UserDto, PersistenceError> {
        tracing::debug!(name, "Registering user");

        let user = self.users.save(User::new(name)).await?;

        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }
}

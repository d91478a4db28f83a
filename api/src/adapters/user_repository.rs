//! UserRepository adapter backed by any UserStore

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::User;
use crate::domain::ports::{UserRepository, UserStore};
use crate::dto::UserDto;
use crate::error::PersistenceError;
use crate::mapper;

/// Repository that translates users to store records and back
pub struct UserRepositoryAdapter<S>
where
    S: UserStore,
{
    store: Arc<S>,
}

impl<S> UserRepositoryAdapter<S>
where
    S: UserStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> UserRepository for UserRepositoryAdapter<S>
where
    S: UserStore,
{
    async fn save(&self, user: User) -> Result<UserDto, PersistenceError> {
        let stored = self.store.insert(mapper::domain_to_record(user)).await?;

        if stored.id.is_none() {
            return Err(PersistenceError::Rejected(
                "store did not assign an id".to_string(),
            ));
        }

        Ok(mapper::record_to_dto(stored))
    }
}

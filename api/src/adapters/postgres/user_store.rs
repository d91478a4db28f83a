//! PostgreSQL adapter for UserStore

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DatabaseConnection, Schema, Set,
};

use crate::domain::ports::{UserRecord, UserStore};
use crate::entity::users;
use crate::error::PersistenceError;

/// PostgreSQL implementation of UserStore
pub struct PostgresUserStore {
    db: DatabaseConnection,
}

impl PostgresUserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create the `users` table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), PersistenceError> {
        let backend = self.db.get_database_backend();
        let mut statement = Schema::new(backend).create_table_from_entity(users::Entity);
        statement.if_not_exists();

        self.db.execute(backend.build(&statement)).await?;

        tracing::debug!("users table ready");
        Ok(())
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn insert(&self, record: UserRecord) -> Result<UserRecord, PersistenceError> {
        // An explicit id would bypass the BIGSERIAL sequence
        if let Some(id) = record.id {
            return Err(PersistenceError::Rejected(format!(
                "user id is store-assigned, got {}",
                id
            )));
        }

        let model = users::ActiveModel {
            id: ActiveValue::NotSet,
            name: Set(record.name),
        };

        // INSERT ... RETURNING reads the sequence-assigned id back
        let result = model.insert(&self.db).await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to insert user");
            PersistenceError::from(e)
        })?;

        Ok(result.into())
    }
}

/// Convert SeaORM model to store record
impl From<users::Model> for UserRecord {
    fn from(model: users::Model) -> Self {
        UserRecord {
            id: Some(model.id),
            name: model.name,
        }
    }
}

//! In-memory adapter for UserStore

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserRecord, UserStore};
use crate::error::PersistenceError;

/// Map of user rows keyed by id, plus the last id handed out
#[derive(Default)]
struct Rows {
    by_id: BTreeMap<i64, String>,
    last_id: i64,
}

/// In-memory implementation of UserStore
///
/// Ids start at 1 and increase monotonically. The counter is guarded by the
/// same lock as the rows, so concurrent inserts never share an id.
#[derive(Default)]
pub struct InMemoryUserStore {
    rows: RwLock<Rows>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.rows.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Store whose next assigned id is `last_id + 1`
    #[cfg(test)]
    fn with_last_id(last_id: i64) -> Self {
        Self {
            rows: RwLock::new(Rows {
                by_id: BTreeMap::new(),
                last_id,
            }),
        }
    }

    pub async fn get(&self, id: i64) -> Option<UserRecord> {
        self.rows.read().await.by_id.get(&id).map(|name| UserRecord {
            id: Some(id),
            name: name.clone(),
        })
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, record: UserRecord) -> Result<UserRecord, PersistenceError> {
        if let Some(id) = record.id {
            return Err(PersistenceError::Rejected(format!(
                "user id is store-assigned, got {}",
                id
            )));
        }

        let mut rows = self.rows.write().await;

        let id = rows
            .last_id
            .checked_add(1)
            .ok_or_else(|| PersistenceError::Rejected("user id space exhausted".to_string()))?;

        rows.last_id = id;
        rows.by_id.insert(id, record.name.clone());

        Ok(UserRecord {
            id: Some(id),
            name: record.name,
        })
    }
}

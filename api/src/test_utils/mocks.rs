//! Mock implementations of store traits

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::ports::{UserRecord, UserStore};
use crate::error::PersistenceError;

// ============================================================================
// Failing User Store
// ============================================================================

/// Store whose every insert fails with the configured error
pub struct FailingUserStore {
    error: PersistenceError,
    attempts: AtomicUsize,
}

impl FailingUserStore {
    pub fn new(error: PersistenceError) -> Self {
        Self {
            error,
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self::new(PersistenceError::Unavailable(
            "connection refused".to_string(),
        ))
    }

    pub fn rejecting() -> Self {
        Self::new(PersistenceError::Rejected(
            "violates not-null constraint".to_string(),
        ))
    }

    pub fn error(&self) -> PersistenceError {
        self.error.clone()
    }

    /// Number of inserts attempted against this store
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for FailingUserStore {
    async fn insert(&self, _record: UserRecord) -> Result<UserRecord, PersistenceError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }
}

// ============================================================================
// Unassigned Id User Store
// ============================================================================

/// Broken store that echoes records back without assigning an id
pub struct UnassignedIdUserStore;

#[async_trait]
impl UserStore for UnassignedIdUserStore {
    async fn insert(&self, record: UserRecord) -> Result<UserRecord, PersistenceError> {
        Ok(record)
    }
}

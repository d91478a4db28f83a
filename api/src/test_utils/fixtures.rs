//! Test fixtures
//!
//! Factory functions for wiring services and building test data.

use std::sync::Arc;

use crate::adapters::{InMemoryUserStore, UserRepositoryAdapter};
use crate::app::{RegisterUserService, RegisterUserUseCase};
use crate::domain::ports::UserStore;
use crate::dto::UserDto;
use crate::{router, AppState};

pub fn test_user_dto(id: i64, name: &str) -> UserDto {
    UserDto {
        id,
        name: name.to_string(),
    }
}

/// Registration service over a fresh in-memory store
pub fn in_memory_service() -> (
    RegisterUserService<UserRepositoryAdapter<InMemoryUserStore>>,
    Arc<InMemoryUserStore>,
) {
    let store = Arc::new(InMemoryUserStore::new());
    let repo = Arc::new(UserRepositoryAdapter::new(store.clone()));
    (RegisterUserService::new(repo), store)
}

/// Full app state wired to the given store
pub fn test_app_state<S: UserStore + 'static>(store: Arc<S>) -> AppState {
    let register_user: Arc<dyn RegisterUserUseCase> = Arc::new(RegisterUserService::new(
        Arc::new(UserRepositoryAdapter::new(store)),
    ));
    AppState { register_user }
}

/// Router without rate limiting, ready for `axum_test::TestServer`
pub fn test_router<S: UserStore + 'static>(store: Arc<S>) -> axum::Router {
    router(test_app_state(store), None).expect("router without rate limit always builds")
}

//! Application layer
//!
//! Contains use cases. Use cases orchestrate domain entities and ports.

pub mod register_user;

pub use register_user::{RegisterUserService, RegisterUserUseCase};

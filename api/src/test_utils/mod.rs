//! Test utilities
//!
//! Manual mock stores and fixtures for unit testing. The repository port
//! also has a mockall mock (`MockUserRepository`) for interaction tests.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

//! Domain ports (traits)
//!
//! Port traits define interfaces that the application layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod repositories;
pub mod store;

pub use repositories::UserRepository;
#[cfg(test)]
pub use repositories::MockUserRepository;
pub use store::{UserRecord, UserStore};

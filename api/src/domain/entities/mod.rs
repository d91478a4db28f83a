//! Domain entities
//!
//! Pure domain models, separate from the SeaORM entities in the `entity` module.

pub mod user;

pub use user::{User, UserId};

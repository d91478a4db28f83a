//! Data transfer objects
//!
//! Shapes exposed across the HTTP boundary.

use serde::{Deserialize, Serialize};

/// A persisted user as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
}

//! Domain layer
//!
//! Contains pure business types with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for persistence

pub mod entities;
pub mod ports;

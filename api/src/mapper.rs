//! Conversions between the domain `User`, the store's `UserRecord`,
//! and the outward `UserDto`.
//!
//! All functions copy `id` and `name` field for field. A DTO always carries an
//! id; converting a value that was never persisted yields id `0`.

use crate::domain::entities::{User, UserId};
use crate::domain::ports::UserRecord;
use crate::dto::UserDto;

pub fn domain_to_dto(user: User) -> UserDto {
    UserDto {
        id: user.id.map(|id| id.0).unwrap_or_default(),
        name: user.name,
    }
}

pub fn domain_to_record(user: User) -> UserRecord {
    UserRecord {
        id: user.id.map(|id| id.0),
        name: user.name,
    }
}

pub fn dto_to_domain(dto: UserDto) -> User {
    User {
        id: Some(UserId(dto.id)),
        name: dto.name,
    }
}

pub fn dto_to_record(dto: UserDto) -> UserRecord {
    UserRecord {
        id: Some(dto.id),
        name: dto.name,
    }
}

pub fn record_to_dto(record: UserRecord) -> UserDto {
    UserDto {
        id: record.id.unwrap_or_default(),
        name: record.name,
    }
}

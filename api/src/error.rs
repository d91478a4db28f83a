//! Error types for the user registry API
//!
//! This module defines error types for each layer:
//! - `PersistenceError`: failures of the backing user store
//! - `AppError`: HTTP layer errors (wraps persistence errors for responses)
//! - `ConfigError`: invalid start-up configuration

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// Persistence errors - the only error kind the domain knows about
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// The store could not be reached (connection refused, pool exhausted)
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store refused the write (constraint violation, malformed statement)
    #[error("Write rejected: {0}")]
    Rejected(String),
}

impl From<DbErr> for PersistenceError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
                PersistenceError::Unavailable(err.to_string())
            }
            other => PersistenceError::Rejected(other.to_string()),
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Persistence(#[from] PersistenceError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Persistence(PersistenceError::Unavailable(msg)) => {
                tracing::error!("User store unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "Service unavailable", None)
            }
            AppError::Persistence(PersistenceError::Rejected(msg)) => {
                tracing::error!("User store rejected write: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

/// Configuration errors raised while reading the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

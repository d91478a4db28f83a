//! User handlers
//!
//! Endpoint for user registration.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::dto::UserDto;
use crate::error::AppError;
use crate::AppState;

/// Query parameters for user registration
#[derive(Debug, Deserialize)]
pub struct RegisterUserParams {
    pub name: String,
}

/// POST /users?name=<name>
///
/// Register a new user. Responds with the stored user.
pub async fn register_user(
    State(state): State<AppState>,
    params: Result<Query<RegisterUserParams>, QueryRejection>,
) -> Result<(StatusCode, Json<UserDto>), AppError> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let user = state.register_user.register(&params.name).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

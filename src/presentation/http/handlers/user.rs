//! User Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{CreateUserRequest, ListResponse};
use crate::application::services::{UserService, UserServiceImpl};
use crate::domain::User;
use crate::presentation::http::extractors::{parse_id, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn user_service(state: &AppState) -> impl UserService {
    UserServiceImpl::new(state.users.clone())
}

/// List all users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<User>>, AppError> {
    let users = user_service(&state).list_users().await?;
    Ok(Json(users.into()))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, AppError> {
    let user_id = parse_id(&user_id, "user")?;

    let user = user_service(&state).get_user(user_id).await?;
    Ok(Json(user))
}

/// Create a user
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = user_service(&state).create_user(body.into_dto()).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Delete a user and everything they own
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let user_id = parse_id(&user_id, "user")?;

    user_service(&state).delete_user(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

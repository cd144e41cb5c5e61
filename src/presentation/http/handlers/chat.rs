//! Chat Handlers
//!
//! Every route is nested under `/users/{user_id}`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{CreateChatRequest, ListResponse};
use crate::application::services::{ChatService, ChatServiceImpl};
use crate::domain::{Chat, ChatWithMessages};
use crate::presentation::http::extractors::{parse_id, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn chat_service(state: &AppState) -> impl ChatService {
    ChatServiceImpl::new(state.users.clone(), state.chats.clone())
}

/// List a user's chats
pub async fn list_chats(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ListResponse<Chat>>, AppError> {
    let user_id = parse_id(&user_id, "user")?;

    let chats = chat_service(&state).list_chats(user_id).await?;
    Ok(Json(chats.into()))
}

/// Create a chat under a user
pub async fn create_chat(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ValidatedJson(body): ValidatedJson<CreateChatRequest>,
) -> Result<(StatusCode, Json<Chat>), AppError> {
    let user_id = parse_id(&user_id, "user")?;

    let chat = chat_service(&state).create_chat(user_id, body.into()).await?;
    Ok((StatusCode::CREATED, Json(chat)))
}

/// Get one of a user's chats, including its messages
pub async fn get_chat(
    State(state): State<AppState>,
    Path((user_id, chat_id)): Path<(String, String)>,
) -> Result<Json<ChatWithMessages>, AppError> {
    let user_id = parse_id(&user_id, "user")?;
    let chat_id = parse_id(&chat_id, "chat")?;

    let chat = chat_service(&state).get_chat(user_id, chat_id).await?;
    Ok(Json(chat))
}

/// Delete one of a user's chats and its messages
pub async fn delete_chat(
    State(state): State<AppState>,
    Path((user_id, chat_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let user_id = parse_id(&user_id, "user")?;
    let chat_id = parse_id(&chat_id, "chat")?;

    chat_service(&state).delete_chat(user_id, chat_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

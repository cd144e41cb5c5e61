//! Message Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{CreateMessageRequest, ListResponse};
use crate::application::services::{MessageService, MessageServiceImpl};
use crate::domain::Message;
use crate::presentation::http::extractors::{parse_id, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn message_service(state: &AppState) -> impl MessageService {
    MessageServiceImpl::new(
        state.users.clone(),
        state.chats.clone(),
        state.messages.clone(),
    )
}

/// Get messages from a user's chat
pub async fn list_messages(
    State(state): State<AppState>,
    Path((user_id, chat_id)): Path<(String, String)>,
) -> Result<Json<ListResponse<Message>>, AppError> {
    let user_id = parse_id(&user_id, "user")?;
    let chat_id = parse_id(&chat_id, "chat")?;

    let messages = message_service(&state).list_messages(user_id, chat_id).await?;
    Ok(Json(messages.into()))
}

/// Add a message to a user's chat
pub async fn create_message(
    State(state): State<AppState>,
    Path((user_id, chat_id)): Path<(String, String)>,
    ValidatedJson(body): ValidatedJson<CreateMessageRequest>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    let user_id = parse_id(&user_id, "user")?;
    let chat_id = parse_id(&chat_id, "chat")?;

    let message = message_service(&state)
        .create_message(user_id, chat_id, body.into_dto())
        .await?;

    Ok((StatusCode::CREATED, Json(message)))
}

/// Get a single message
pub async fn get_message(
    State(state): State<AppState>,
    Path((user_id, chat_id, message_id)): Path<(String, String, String)>,
) -> Result<Json<Message>, AppError> {
    let user_id = parse_id(&user_id, "user")?;
    let chat_id = parse_id(&chat_id, "chat")?;
    let message_id = parse_id(&message_id, "message")?;

    let message = message_service(&state)
        .get_message(user_id, chat_id, message_id)
        .await?;

    Ok(Json(message))
}

/// Delete a message
pub async fn delete_message(
    State(state): State<AppState>,
    Path((user_id, chat_id, message_id)): Path<(String, String, String)>,
) -> Result<StatusCode, AppError> {
    let user_id = parse_id(&user_id, "user")?;
    let chat_id = parse_id(&chat_id, "chat")?;
    let message_id = parse_id(&message_id, "message")?;

    message_service(&state)
        .delete_message(user_id, chat_id, message_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

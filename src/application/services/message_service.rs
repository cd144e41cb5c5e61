//! Message Service
//!
//! Handles message operations inside a user's chat. The owning user and
//! chat are resolved before any message is read or written.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{ChatRepository, Message, MessageRepository, NewMessage, UserRepository};
use crate::shared::error::AppError;

/// Message service trait
#[async_trait]
pub trait MessageService: Send + Sync {
    /// Get all messages of a user's chat
    async fn list_messages(&self, user_id: i64, chat_id: i64) -> Result<Vec<Message>, MessageError>;

    /// Get a single message
    async fn get_message(
        &self,
        user_id: i64,
        chat_id: i64,
        message_id: i64,
    ) -> Result<Message, MessageError>;

    /// Add a message to a user's chat
    async fn create_message(
        &self,
        user_id: i64,
        chat_id: i64,
        request: CreateMessageDto,
    ) -> Result<Message, MessageError>;

    /// Delete a message
    async fn delete_message(
        &self,
        user_id: i64,
        chat_id: i64,
        message_id: i64,
    ) -> Result<(), MessageError>;
}

/// Create message request
#[derive(Debug, Clone)]
pub struct CreateMessageDto {
    pub question: String,
    pub answer: String,
}

/// Message service errors
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("User not found")]
    UserNotFound,

    #[error("Chat not found")]
    ChatNotFound,

    #[error("Message not found")]
    NotFound,

    #[error(transparent)]
    Repository(#[from] AppError),
}

impl From<MessageError> for AppError {
    fn from(err: MessageError) -> Self {
        match err {
            MessageError::UserNotFound => AppError::NotFound("User not found".into()),
            MessageError::ChatNotFound => AppError::NotFound("Chat not found".into()),
            MessageError::NotFound => AppError::NotFound("Message not found".into()),
            MessageError::Repository(e) => e,
        }
    }
}

/// MessageService implementation
pub struct MessageServiceImpl<U, C, M>
where
    U: UserRepository + ?Sized,
    C: ChatRepository + ?Sized,
    M: MessageRepository + ?Sized,
{
    user_repo: Arc<U>,
    chat_repo: Arc<C>,
    message_repo: Arc<M>,
}

impl<U, C, M> MessageServiceImpl<U, C, M>
where
    U: UserRepository + ?Sized,
    C: ChatRepository + ?Sized,
    M: MessageRepository + ?Sized,
{
    pub fn new(user_repo: Arc<U>, chat_repo: Arc<C>, message_repo: Arc<M>) -> Self {
        Self {
            user_repo,
            chat_repo,
            message_repo,
        }
    }

    /// Resolve the user, then the chat within that user's chats.
    async fn check_chat_access(&self, user_id: i64, chat_id: i64) -> Result<(), MessageError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(MessageError::UserNotFound)?;

        self.chat_repo
            .find_for_user(chat_id, user_id)
            .await?
            .ok_or(MessageError::ChatNotFound)?;

        Ok(())
    }
}

#[async_trait]
impl<U, C, M> MessageService for MessageServiceImpl<U, C, M>
where
    U: UserRepository + ?Sized + 'static,
    C: ChatRepository + ?Sized + 'static,
    M: MessageRepository + ?Sized + 'static,
{
    async fn list_messages(&self, user_id: i64, chat_id: i64) -> Result<Vec<Message>, MessageError> {
        self.check_chat_access(user_id, chat_id).await?;
        Ok(self.message_repo.find_by_chat(chat_id).await?)
    }

    async fn get_message(
        &self,
        user_id: i64,
        chat_id: i64,
        message_id: i64,
    ) -> Result<Message, MessageError> {
        self.check_chat_access(user_id, chat_id).await?;

        self.message_repo
            .find_in_chat(message_id, chat_id)
            .await?
            .ok_or(MessageError::NotFound)
    }

    async fn create_message(
        &self,
        user_id: i64,
        chat_id: i64,
        request: CreateMessageDto,
    ) -> Result<Message, MessageError> {
        self.check_chat_access(user_id, chat_id).await?;

        let message = self
            .message_repo
            .create(&NewMessage {
                chat_id,
                question: request.question,
                answer: request.answer,
            })
            .await?;

        tracing::info!(chat_id, message_id = message.id, "Message created");
        Ok(message)
    }

    async fn delete_message(
        &self,
        user_id: i64,
        chat_id: i64,
        message_id: i64,
    ) -> Result<(), MessageError> {
        self.check_chat_access(user_id, chat_id).await?;

        let deleted = self.message_repo.delete_in_chat(message_id, chat_id).await?;
        if deleted == 0 {
            return Err(MessageError::NotFound);
        }

        tracing::info!(chat_id, message_id, "Message deleted");
        Ok(())
    }
}

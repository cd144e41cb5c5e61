//! Chat Service
//!
//! Chats are always addressed through their owning user: the user is looked
//! up first, then the chat is resolved within that user's chats.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Chat, ChatRepository, ChatWithMessages, NewChat, UserRepository};
use crate::shared::error::AppError;

/// Chat service trait
#[async_trait]
pub trait ChatService: Send + Sync {
    /// List a user's chats
    async fn list_chats(&self, user_id: i64) -> Result<Vec<Chat>, ChatError>;

    /// Create a chat for a user
    async fn create_chat(&self, user_id: i64, request: CreateChatDto) -> Result<Chat, ChatError>;

    /// Get one of a user's chats with its messages
    async fn get_chat(&self, user_id: i64, chat_id: i64) -> Result<ChatWithMessages, ChatError>;

    /// Delete one of a user's chats and all of its messages
    async fn delete_chat(&self, user_id: i64, chat_id: i64) -> Result<(), ChatError>;
}

/// Create chat request
#[derive(Debug, Clone, Default)]
pub struct CreateChatDto {
    pub title: Option<String>,
}

/// Chat service errors
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("User not found")]
    UserNotFound,

    #[error("Chat not found")]
    NotFound,

    #[error(transparent)]
    Repository(#[from] AppError),
}

impl From<ChatError> for AppError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::UserNotFound => AppError::NotFound("User not found".into()),
            ChatError::NotFound => AppError::NotFound("Chat not found".into()),
            ChatError::Repository(e) => e,
        }
    }
}

/// ChatService implementation
pub struct ChatServiceImpl<U, C>
where
    U: UserRepository + ?Sized,
    C: ChatRepository + ?Sized,
{
    user_repo: Arc<U>,
    chat_repo: Arc<C>,
}

impl<U, C> ChatServiceImpl<U, C>
where
    U: UserRepository + ?Sized,
    C: ChatRepository + ?Sized,
{
    pub fn new(user_repo: Arc<U>, chat_repo: Arc<C>) -> Self {
        Self {
            user_repo,
            chat_repo,
        }
    }

    async fn ensure_user(&self, user_id: i64) -> Result<(), ChatError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .map(|_| ())
            .ok_or(ChatError::UserNotFound)
    }
}

#[async_trait]
impl<U, C> ChatService for ChatServiceImpl<U, C>
where
    U: UserRepository + ?Sized + 'static,
    C: ChatRepository + ?Sized + 'static,
{
    async fn list_chats(&self, user_id: i64) -> Result<Vec<Chat>, ChatError> {
        self.ensure_user(user_id).await?;
        Ok(self.chat_repo.find_by_user(user_id).await?)
    }

    async fn create_chat(&self, user_id: i64, request: CreateChatDto) -> Result<Chat, ChatError> {
        self.ensure_user(user_id).await?;

        let chat = self
            .chat_repo
            .create(&NewChat {
                user_id,
                title: request.title,
            })
            .await?;

        tracing::info!(user_id, chat_id = chat.id, "Chat created");
        Ok(chat)
    }

    async fn get_chat(&self, user_id: i64, chat_id: i64) -> Result<ChatWithMessages, ChatError> {
        self.ensure_user(user_id).await?;

        self.chat_repo
            .find_with_messages(chat_id, user_id)
            .await?
            .ok_or(ChatError::NotFound)
    }

    async fn delete_chat(&self, user_id: i64, chat_id: i64) -> Result<(), ChatError> {
        self.ensure_user(user_id).await?;

        let deleted = self.chat_repo.delete_for_user(chat_id, user_id).await?;
        if deleted == 0 {
            return Err(ChatError::NotFound);
        }

        tracing::info!(user_id, chat_id, "Chat deleted with its messages");
        Ok(())
    }
}

//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **UserService**: User listing, creation and deletion
//! - **ChatService**: Chats scoped to their owning user
//! - **MessageService**: Messages scoped to a user's chat

pub mod user_service;
pub mod chat_service;
pub mod message_service;

// Re-export user service types
pub use user_service::{CreateUserDto, UserError, UserService, UserServiceImpl};

// Re-export chat service types
pub use chat_service::{ChatError, ChatService, ChatServiceImpl, CreateChatDto};

// Re-export message service types
pub use message_service::{CreateMessageDto, MessageError, MessageService, MessageServiceImpl};

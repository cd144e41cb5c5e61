//! # Domain Entities
//!
//! Core domain entities. All entities map directly to their corresponding
//! database tables.
//!
//! - **User**: a person; owns chats
//! - **Chat**: a titled conversation belonging to one user; owns messages
//! - **Message**: a question/answer pair belonging to one chat
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle. Referential integrity on delete is the
//! repositories' job: removing a parent removes its dependents in the same
//! transaction.

mod user;
mod chat;
mod message;

pub use user::{NewUser, User, UserRepository};
pub use chat::{Chat, ChatRepository, ChatWithMessages, NewChat};
pub use message::{Message, MessageRepository, NewMessage};

#[cfg(test)]
pub use user::MockUserRepository;
#[cfg(test)]
pub use chat::MockChatRepository;
#[cfg(test)]
pub use message::MockMessageRepository;

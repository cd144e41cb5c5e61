//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgUserRepository** - users; deleting one removes their chats and messages
//! - **PgChatRepository** - chats scoped by owning user, eager message loading
//! - **PgMessageRepository** - messages scoped by chat
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{
//!     PgChatRepository, PgMessageRepository, PgUserRepository,
//! };
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let user_repo = PgUserRepository::new(pool.clone());
//!     let chat_repo = PgChatRepository::new(pool.clone());
//!     let message_repo = PgMessageRepository::new(pool);
//! }
//! ```

pub mod user_repository;
pub mod chat_repository;
pub mod message_repository;

pub use user_repository::PgUserRepository;
pub use chat_repository::PgChatRepository;
pub use message_repository::PgMessageRepository;

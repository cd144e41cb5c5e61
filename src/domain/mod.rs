//! # Domain Layer
//!
//! The domain layer contains the data model of the API: users, their chats
//! and the messages inside those chats. It is independent of any external
//! frameworks or infrastructure concerns.
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Relations are explicit foreign ids, resolved through repository queries

pub mod entities;

// Re-export commonly used types
pub use entities::*;

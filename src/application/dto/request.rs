//! Request DTOs
//!
//! Data structures for API request bodies. Required fields are `Option` so a
//! missing field is reported as a validation violation instead of a decode
//! failure.

use serde::Deserialize;
use validator::Validate;

use crate::application::services::{CreateChatDto, CreateMessageDto, CreateUserDto};

/// Create user request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(
        required(message = "firstName is required"),
        length(min = 1, max = 255, message = "firstName must be 1-255 characters")
    )]
    pub first_name: Option<String>,

    #[validate(
        required(message = "lastName is required"),
        length(min = 1, max = 255, message = "lastName must be 1-255 characters")
    )]
    pub last_name: Option<String>,

    #[validate(
        required(message = "age is required"),
        range(min = 0, message = "age must be a non-negative integer")
    )]
    pub age: Option<i32>,
}

impl CreateUserRequest {
    /// Convert a validated request; required fields are present.
    pub fn into_dto(self) -> CreateUserDto {
        CreateUserDto {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            age: self.age.unwrap_or_default(),
        }
    }
}

/// Create chat request
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateChatRequest {
    #[validate(length(max = 255, message = "title must be at most 255 characters"))]
    pub title: Option<String>,
}

impl From<CreateChatRequest> for CreateChatDto {
    fn from(request: CreateChatRequest) -> Self {
        Self {
            title: request.title,
        }
    }
}

/// Create message request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[validate(
        required(message = "question is required"),
        length(min = 1, message = "question must not be empty")
    )]
    pub question: Option<String>,

    #[validate(
        required(message = "answer is required"),
        length(min = 1, message = "answer must not be empty")
    )]
    pub answer: Option<String>,
}

impl CreateMessageRequest {
    /// Convert a validated request; required fields are present.
    pub fn into_dto(self) -> CreateMessageDto {
        CreateMessageDto {
            question: self.question.unwrap_or_default(),
            answer: self.answer.unwrap_or_default(),
        }
    }
}

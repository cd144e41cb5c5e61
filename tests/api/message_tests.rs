//! Message API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{error_fields, TestApp};

#[tokio::test]
async fn test_created_message_appears_once_in_list() {
    let app = TestApp::new().await;
    let user_id = app.create_user().await;
    let chat_id = app.create_chat(user_id, "science").await;
    let uri = format!("/users/{user_id}/chats/{chat_id}/messages");

    let created = app
        .post_json(&uri, &json!({ "question": "Boiling point of water?", "answer": "100 C" }))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["chatId"], chat_id);

    let response = app.get(&uri).await;

    assert_eq!(response.status, StatusCode::OK);
    let matching: Vec<_> = response.body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter(|m| m["id"] == created.body["id"])
        .cloned()
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0]["question"], "Boiling point of water?");
    assert_eq!(matching[0]["answer"], "100 C");
}

#[tokio::test]
async fn test_create_message_requires_question_and_answer() {
    let app = TestApp::new().await;
    let user_id = app.create_user().await;
    let chat_id = app.create_chat(user_id, "empty").await;

    let response = app
        .post_json(
            &format!("/users/{user_id}/chats/{chat_id}/messages"),
            &json!({ "question": "" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&response.body), vec!["answer", "question"]);
    assert_eq!(app.store.message_count(), 0);
}

#[tokio::test]
async fn test_create_message_in_missing_chat_returns_404() {
    let app = TestApp::new().await;
    let user_id = app.create_user().await;

    let response = app
        .post_json(
            &format!("/users/{user_id}/chats/99/messages"),
            &json!({ "question": "anyone?", "answer": "no" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Chat not found");
    assert_eq!(app.store.message_count(), 0);
}

#[tokio::test]
async fn test_create_message_for_missing_user_returns_404() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/users/5/chats/1/messages",
            &json!({ "question": "anyone?", "answer": "no" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "User not found");
}

#[tokio::test]
async fn test_get_message_through_wrong_chat_returns_404() {
    let app = TestApp::new().await;
    let user_id = app.create_user().await;
    let home = app.create_chat(user_id, "home").await;
    let other = app.create_chat(user_id, "other").await;
    let message_id = app.create_message(user_id, home, "where am I?").await;

    let found = app
        .get(&format!("/users/{user_id}/chats/{home}/messages/{message_id}"))
        .await;
    let misplaced = app
        .get(&format!("/users/{user_id}/chats/{other}/messages/{message_id}"))
        .await;

    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body["question"], "where am I?");
    assert_eq!(misplaced.status, StatusCode::NOT_FOUND);
    assert_eq!(misplaced.body["message"], "Message not found");
}

#[tokio::test]
async fn test_delete_message_twice_returns_404() {
    let app = TestApp::new().await;
    let user_id = app.create_user().await;
    let chat_id = app.create_chat(user_id, "short lived").await;
    let message_id = app.create_message(user_id, chat_id, "still here?").await;
    let uri = format!("/users/{user_id}/chats/{chat_id}/messages/{message_id}");

    let first = app.delete(&uri).await;
    let second = app.delete(&uri).await;

    assert_eq!(first.status, StatusCode::NO_CONTENT);
    assert_eq!(second.status, StatusCode::NOT_FOUND);
    assert_eq!(second.body["message"], "Message not found");
}

#[tokio::test]
async fn test_non_numeric_message_id_returns_400() {
    let app = TestApp::new().await;

    let response = app.delete("/users/1/chats/1/messages/first").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid message ID");
}

//! Message self-test endpoint
//!
//! `GET /` writes one fixed row before reading everything back, which
//! doubles as a database connectivity check for the frontend.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{MessageRecord, MessageRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Fixed text written on every self-test call.
const SELF_TEST_TEXT: &str = "Hello from redpulse and PostgreSQL!";

/// One stored message
#[derive(Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub text: String,
}

impl From<MessageRecord> for MessageResponse {
    fn from(m: MessageRecord) -> Self {
        Self {
            id: m.id,
            text: m.text,
        }
    }
}

/// Self-test response envelope
#[derive(Serialize)]
pub struct SelfTestResponse {
    pub message: &'static str,
    pub all_messages: Vec<MessageResponse>,
}

/// GET / - write one test message, then return all stored messages
async fn self_test(State(state): State<Arc<AppState>>) -> Result<Json<SelfTestResponse>, ApiError> {
    let repo = MessageRepo::new(&state.pool);

    repo.create(SELF_TEST_TEXT).await?;
    let messages = repo.list_all().await?;

    Ok(Json(SelfTestResponse {
        message: "Test message saved and retrieved!",
        all_messages: messages.into_iter().map(MessageResponse::from).collect(),
    }))
}

/// Message routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(self_test))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_envelope_shape() {
        let body = SelfTestResponse {
            message: "Test message saved and retrieved!",
            all_messages: vec![MessageResponse {
                id: 1,
                text: SELF_TEST_TEXT.to_string(),
            }],
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "Test message saved and retrieved!");
        assert_eq!(json["all_messages"][0]["id"], 1);
        assert_eq!(json["all_messages"][0]["text"], SELF_TEST_TEXT);
    }
}

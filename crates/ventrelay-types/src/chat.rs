//! Chat UI payloads exchanged with the front-end.
//!
//! These are the shapes the chat template posts and expects back. Field
//! names are camelCase to match the UI's JavaScript conventions.

use serde::{Deserialize, Serialize};

use crate::session::{Message, SessionId};

/// Role of a message as rendered by the chat UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry of the UI's message list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// String form of the backend timestamp.
    pub id: String,
    pub role: ChatRole,
    pub content: String,
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        Self {
            id: message.timestamp.to_string(),
            role: if message.is_user {
                ChatRole::User
            } else {
                ChatRole::Assistant
            },
            content: message.text.clone(),
        }
    }
}

/// A message as posted by the UI. Only `content` is read; the UI may send
/// extra fields (role, id, ...) which are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub content: String,
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostChatRequest {
    #[serde(default)]
    pub messages: Vec<IncomingMessage>,
    /// Session to continue. Absent, `null` and `""` all start a new session.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Successful reply to `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostChatResponse {
    /// Text of the backend's reply.
    pub response: String,
    pub session_id: SessionId,
}

/// Successful reply to `GET /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistoryResponse {
    pub messages: Vec<ChatMessage>,
    pub session_id: SessionId,
}

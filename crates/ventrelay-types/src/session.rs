//! Session and message types as issued by the remote conversation backend.
//!
//! The backend owns these values. The relay only passes them through, so the
//! serde representation mirrors the backend's wire shape (camelCase fields).

use serde::{Deserialize, Serialize};

use std::fmt;

/// Opaque session identifier issued by the backend.
///
/// The relay never generates one; it only stores ids it received from the
/// backend or from a caller resuming an earlier conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl SessionId {
    /// Wrap a raw id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Normalize an optional caller-supplied id.
    ///
    /// Absent and empty values both mean "no session yet".
    pub fn from_optional(id: Option<&str>) -> Option<Self> {
        match id {
            Some(s) if !s.is_empty() => Some(Self::new(s)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A single conversational turn.
///
/// `timestamp` is assigned by the backend and doubles as the message's
/// identifier within a session. History order is the backend's order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub text: String,
    pub timestamp: i64,
    pub is_user: bool,
}

/// A backend-owned conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: SessionId,
    pub messages: Vec<Message>,
    /// Emotion classification computed by the backend, if any.
    #[serde(default)]
    pub dominant_emotion: Option<String>,
    pub last_active: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_uses_backend_field_names() {
        let json = r#"{"text":"hi back","timestamp":42,"isUser":false}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(
            msg,
            Message {
                text: "hi back".to_string(),
                timestamp: 42,
                is_user: false,
            }
        );

        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["isUser"], false);
        assert!(value.get("is_user").is_none());
    }

    #[test]
    fn test_session_without_emotion() {
        let json = r#"{
            "id": "sess-1",
            "messages": [{"text": "hello", "timestamp": 1, "isUser": true}],
            "dominantEmotion": null,
            "lastActive": 7
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.id.as_str(), "sess-1");
        assert_eq!(session.messages.len(), 1);
        assert!(session.dominant_emotion.is_none());
        assert_eq!(session.last_active, 7);
    }

    #[test]
    fn test_session_id_from_optional_treats_empty_as_none() {
        assert_eq!(SessionId::from_optional(None), None);
        assert_eq!(SessionId::from_optional(Some("")), None);
        assert_eq!(
            SessionId::from_optional(Some("sess-9")),
            Some(SessionId::new("sess-9"))
        );
    }

    #[test]
    fn test_session_id_serializes_as_plain_string() {
        let id = SessionId::new("sess-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""sess-1""#);
        assert_eq!(id.to_string(), "sess-1");
    }
}

//! Tagged result shape returned by mutating backend calls.

use serde::{Deserialize, Serialize};

/// Either a success payload or an error message, never both.
///
/// Wire form is `{"success": <T>}` or `{"error": "<text>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteResult<T> {
    Success(T),
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Message;

    #[test]
    fn test_success_variant_from_wire() {
        let result: RemoteResult<String> = serde_json::from_str(r#"{"success":"sess-1"}"#).unwrap();
        assert_eq!(result, RemoteResult::Success("sess-1".to_string()));
    }

    #[test]
    fn test_error_variant_from_wire() {
        let result: RemoteResult<Message> =
            serde_json::from_str(r#"{"error":"session not found"}"#).unwrap();
        assert_eq!(result, RemoteResult::Error("session not found".to_string()));
    }

    #[test]
    fn test_untagged_payload_is_rejected() {
        let result = serde_json::from_str::<RemoteResult<String>>(r#""sess-1""#);
        assert!(result.is_err());
    }
}

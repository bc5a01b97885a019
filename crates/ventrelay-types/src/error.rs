use thiserror::Error;

/// Failures surfaced by the session relay.
///
/// The display strings are safe to show to an end user; backend details are
/// logged where the failure happens and never carried here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("No active session. Please create a session first.")]
    NoActiveSession,

    #[error("Could not start a new session. Please try again later.")]
    SessionCreation,

    #[error("Message could not be sent. Please try again.")]
    MessageSend,

    #[error("The conversation contains no message to send.")]
    MissingUserMessage,
}

/// Errors from talking to the remote conversation backend.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode backend response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_error_display_is_user_safe() {
        assert_eq!(
            RelayError::NoActiveSession.to_string(),
            "No active session. Please create a session first."
        );
        assert_eq!(
            RelayError::SessionCreation.to_string(),
            "Could not start a new session. Please try again later."
        );
        assert_eq!(
            RelayError::MessageSend.to_string(),
            "Message could not be sent. Please try again."
        );
    }

    #[test]
    fn test_remote_error_display() {
        let err = RemoteError::Status {
            status: 503,
            body: "replica unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "backend returned HTTP 503: replica unavailable");
    }
}

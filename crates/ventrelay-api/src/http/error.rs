//! Application error type mapping to HTTP status codes.
//!
//! Errors carry no internal detail: handlers log the underlying failure
//! before converting it, and the client only ever sees a fixed message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error that maps to HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppError {
    /// Posting a chat message failed.
    PostChat,
    /// Loading chat history failed.
    LoadHistory,
    /// No session with the requested id.
    SessionNotFound,
}

impl AppError {
    fn status_and_message(self) -> (StatusCode, &'static str) {
        match self {
            AppError::PostChat => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while processing your message",
            ),
            AppError::LoadHistory => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load chat history",
            ),
            AppError::SessionNotFound => (StatusCode::NOT_FOUND, "Session not found"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

//! Chat HTTP handlers.
//!
//! Endpoints:
//! - POST /api/chat            - Send the last posted message, creating a session if needed
//! - GET  /api/chat            - Load a session's history (`?sessionId=`), creating one if absent
//! - GET  /api/chat/session    - Fetch the stored session (`?sessionId=`)
//!
//! Relay failures are logged here with the request id and answered with a
//! generic error; internal error text never reaches the client.

use std::time::Instant;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use ventrelay_types::chat::{ChatHistoryResponse, PostChatRequest, PostChatResponse};
use ventrelay_types::session::{Session, SessionId};

use crate::http::error::AppError;
use crate::state::AppState;

/// Query parameters naming a session.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionQuery {
    #[serde(default)]
    pub session_id: Option<String>,
}

impl SessionQuery {
    fn session_id(&self) -> Option<SessionId> {
        SessionId::from_optional(self.session_id.as_deref())
    }
}

/// POST /api/chat - Relay a user message to the backend.
pub async fn post_chat(
    State(state): State<AppState>,
    payload: Result<Json<PostChatRequest>, JsonRejection>,
) -> Result<Json<PostChatResponse>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7();

    let Json(request) = payload.map_err(|e| {
        error!(request_id = %request_id, error = %e, "Error in chat API: invalid request body");
        AppError::PostChat
    })?;

    let response = state.chat.post_message(request).await.map_err(|e| {
        error!(request_id = %request_id, error = %e, "Error in chat API");
        AppError::PostChat
    })?;

    info!(
        request_id = %request_id,
        session_id = %response.session_id,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Chat message relayed"
    );

    Ok(Json(response))
}

/// GET /api/chat - Load the UI message list for a session.
pub async fn get_chat_history(
    State(state): State<AppState>,
    query: Result<Query<SessionQuery>, QueryRejection>,
) -> Result<Json<ChatHistoryResponse>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7();

    let Query(query) = query.map_err(|e| {
        error!(request_id = %request_id, error = %e, "Error fetching chat history: invalid query");
        AppError::LoadHistory
    })?;

    let response = state
        .chat
        .get_history(query.session_id())
        .await
        .map_err(|e| {
            error!(request_id = %request_id, error = %e, "Error fetching chat history");
            AppError::LoadHistory
        })?;

    info!(
        request_id = %request_id,
        session_id = %response.session_id,
        messages = response.messages.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Chat history loaded"
    );

    Ok(Json(response))
}

/// GET /api/chat/session - Fetch the session as the backend stores it.
pub async fn get_chat_session(
    State(state): State<AppState>,
    query: Result<Query<SessionQuery>, QueryRejection>,
) -> Result<Json<Session>, AppError> {
    let Query(query) = query.map_err(|e| {
        warn!(request_id = %Uuid::now_v7(), error = %e, "Invalid session query");
        AppError::SessionNotFound
    })?;

    state
        .chat
        .get_session(query.session_id())
        .await
        .map(Json)
        .ok_or(AppError::SessionNotFound)
}

//! ChatRequestHandler -- the two UI-facing chat operations.
//!
//! Each call builds its own [`SessionRelayClient`] over the shared backend,
//! resolves or creates the session on it, then shapes the result for the UI.

use std::sync::Arc;

use tracing::debug;

use ventrelay_types::chat::{ChatHistoryResponse, ChatMessage, PostChatRequest, PostChatResponse};
use ventrelay_types::error::RelayError;
use ventrelay_types::session::{Message, Session, SessionId};

use crate::relay::SessionRelayClient;
use crate::remote::RemoteConversationService;

/// Adapts chat requests to relay client calls.
pub struct ChatRequestHandler<S> {
    service: Arc<S>,
}

impl<S: RemoteConversationService> ChatRequestHandler<S> {
    /// Create a handler over a shared backend transport.
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }

    /// A fresh relay client with no active session.
    pub fn relay(&self) -> SessionRelayClient<S> {
        SessionRelayClient::new(Arc::clone(&self.service))
    }

    /// Send the last message of the posted conversation.
    ///
    /// Continues the posted session when one is given, otherwise starts a new
    /// one first. The reply carries the backend's text and the session id the
    /// message was sent to.
    pub async fn post_message(
        &self,
        request: PostChatRequest,
    ) -> Result<PostChatResponse, RelayError> {
        let last = request
            .messages
            .last()
            .ok_or(RelayError::MissingUserMessage)?;

        let mut relay = self.relay();
        match SessionId::from_optional(request.session_id.as_deref()) {
            Some(session_id) => relay.set_session_id(session_id),
            None => {
                relay.create_session().await?;
            }
        }

        let reply = relay.send_message(&last.content).await?;
        let session_id = relay
            .session_id()
            .cloned()
            .ok_or(RelayError::NoActiveSession)?;

        debug!(session_id = %session_id, "Chat message relayed");

        Ok(PostChatResponse {
            response: reply.text,
            session_id,
        })
    }

    /// Load a session's messages for display.
    ///
    /// Without a session id a new session is started and returned with an
    /// empty message list. History failures yield an empty list, not an error.
    pub async fn get_history(
        &self,
        session_id: Option<SessionId>,
    ) -> Result<ChatHistoryResponse, RelayError> {
        let mut relay = self.relay();

        let Some(session_id) = session_id else {
            let session_id = relay.create_session().await?;
            return Ok(ChatHistoryResponse {
                messages: Vec::new(),
                session_id,
            });
        };

        relay.set_session_id(session_id.clone());
        let history = relay.session_history().await;

        Ok(ChatHistoryResponse {
            messages: to_chat_messages(&history),
            session_id,
        })
    }

    /// Fetch the stored session, if the backend has it.
    pub async fn get_session(&self, session_id: Option<SessionId>) -> Option<Session> {
        let mut relay = self.relay();
        relay.set_session_id(session_id?);
        relay.current_session().await
    }
}

/// Map backend messages to UI entries, keeping their order.
pub fn to_chat_messages(messages: &[Message]) -> Vec<ChatMessage> {
    messages.iter().map(ChatMessage::from).collect()
}

//! SessionRelayClient -- a session-pointer API over a stateless backend.
//!
//! The client holds a shared handle to the backend transport plus one
//! "current session" pointer. Handles are cheap: the HTTP layer builds a fresh
//! one per request, so concurrent requests never share a pointer.
//!
//! Failure policy is asymmetric. Creating a session and sending a message are
//! load-bearing and fail with a [`RelayError`]; reading history is advisory
//! and degrades to an empty list.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use ventrelay_types::error::RelayError;
use ventrelay_types::remote::RemoteResult;
use ventrelay_types::session::{Message, Session, SessionId};

use crate::remote::RemoteConversationService;

/// Relay client owning a single current-session pointer.
pub struct SessionRelayClient<S> {
    service: Arc<S>,
    session_id: Option<SessionId>,
}

impl<S> Clone for SessionRelayClient<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            session_id: self.session_id.clone(),
        }
    }
}

impl<S: RemoteConversationService> SessionRelayClient<S> {
    /// Create a client with no active session.
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            session_id: None,
        }
    }

    /// Start a new backend session and make it current.
    ///
    /// The backend's error text (or transport error) is logged; callers get
    /// [`RelayError::SessionCreation`].
    pub async fn create_session(&mut self) -> Result<SessionId, RelayError> {
        match self.service.new_session().await {
            Ok(RemoteResult::Success(session_id)) => {
                info!(session_id = %session_id, "Session created");
                self.session_id = Some(session_id.clone());
                Ok(session_id)
            }
            Ok(RemoteResult::Error(message)) => {
                error!(error = %message, "Failed to create session: rejected by backend");
                Err(RelayError::SessionCreation)
            }
            Err(e) => {
                error!(error = %e, "Failed to create session");
                Err(RelayError::SessionCreation)
            }
        }
    }

    /// Send a message in the current session and return the backend's reply.
    ///
    /// Fails with [`RelayError::NoActiveSession`] without contacting the
    /// backend when no session is set. The pointer is never modified.
    pub async fn send_message(&self, content: &str) -> Result<Message, RelayError> {
        let Some(session_id) = &self.session_id else {
            return Err(RelayError::NoActiveSession);
        };

        match self.service.send_message(session_id, content).await {
            Ok(RemoteResult::Success(message)) => {
                debug!(session_id = %session_id, timestamp = message.timestamp, "Message sent");
                Ok(message)
            }
            Ok(RemoteResult::Error(message)) => {
                error!(session_id = %session_id, error = %message, "Failed to send message: rejected by backend");
                Err(RelayError::MessageSend)
            }
            Err(e) => {
                error!(session_id = %session_id, error = %e, "Failed to send message");
                Err(RelayError::MessageSend)
            }
        }
    }

    /// Messages of the current session, in backend order.
    ///
    /// Returns an empty list when no session is set (without contacting the
    /// backend) or when the backend call fails.
    pub async fn session_history(&self) -> Vec<Message> {
        let Some(session_id) = &self.session_id else {
            return Vec::new();
        };

        match self.service.get_session_history(session_id).await {
            Ok(messages) => messages,
            Err(e) => {
                warn!(session_id = %session_id, error = %e, "Failed to get session history");
                Vec::new()
            }
        }
    }

    /// The whole current session as the backend stores it.
    ///
    /// Same soft policy as [`session_history`](Self::session_history): no
    /// session or a failed call yields `None`.
    pub async fn current_session(&self) -> Option<Session> {
        let session_id = self.session_id.as_ref()?;

        match self.service.get_session(session_id).await {
            Ok(session) => session,
            Err(e) => {
                warn!(session_id = %session_id, error = %e, "Failed to get session");
                None
            }
        }
    }

    /// The current session pointer.
    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    /// Point the client at an existing session.
    ///
    /// Not validated; an unknown id surfaces on the next backend call.
    pub fn set_session_id(&mut self, session_id: impl Into<SessionId>) {
        self.session_id = Some(session_id.into());
    }
}

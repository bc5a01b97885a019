//! Recording mock backend shared by the core unit tests.

use std::sync::{Arc, Mutex};

use ventrelay_types::error::RemoteError;
use ventrelay_types::remote::RemoteResult;
use ventrelay_types::session::{Message, Session, SessionId};

use crate::remote::RemoteConversationService;

/// A backend call as observed by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    NewSession,
    SendMessage(SessionId, String),
    GetSessionHistory(SessionId),
    GetSession(SessionId),
}

/// Canned replies; `Err(text)` becomes a transport failure.
pub struct MockService {
    new_session: Result<RemoteResult<SessionId>, String>,
    send_message: Result<RemoteResult<Message>, String>,
    history: Result<Vec<Message>, String>,
    session: Result<Option<Session>, String>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            new_session: Ok(RemoteResult::Error("newSession not configured".to_string())),
            send_message: Ok(RemoteResult::Error("sendMessage not configured".to_string())),
            history: Ok(Vec::new()),
            session: Ok(None),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_new_session(mut self, reply: RemoteResult<SessionId>) -> Self {
        self.new_session = Ok(reply);
        self
    }

    pub fn with_send_message(mut self, reply: RemoteResult<Message>) -> Self {
        self.send_message = Ok(reply);
        self
    }

    pub fn with_history(mut self, messages: Vec<Message>) -> Self {
        self.history = Ok(messages);
        self
    }

    pub fn with_session(mut self, session: Option<Session>) -> Self {
        self.session = Ok(session);
        self
    }

    pub fn failing_new_session(mut self, transport_error: &str) -> Self {
        self.new_session = Err(transport_error.to_string());
        self
    }

    pub fn failing_send_message(mut self, transport_error: &str) -> Self {
        self.send_message = Err(transport_error.to_string());
        self
    }

    pub fn failing_history(mut self, transport_error: &str) -> Self {
        self.history = Err(transport_error.to_string());
        self
    }

    pub fn failing_session(mut self, transport_error: &str) -> Self {
        self.session = Err(transport_error.to_string());
        self
    }

    pub fn calls_handle(&self) -> Arc<Mutex<Vec<Call>>> {
        Arc::clone(&self.calls)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn replay<T: Clone>(reply: &Result<T, String>) -> Result<T, RemoteError> {
    reply.clone().map_err(RemoteError::Transport)
}

impl RemoteConversationService for MockService {
    async fn new_session(&self) -> Result<RemoteResult<SessionId>, RemoteError> {
        self.record(Call::NewSession);
        replay(&self.new_session)
    }

    async fn send_message(
        &self,
        session_id: &SessionId,
        text: &str,
    ) -> Result<RemoteResult<Message>, RemoteError> {
        self.record(Call::SendMessage(session_id.clone(), text.to_string()));
        replay(&self.send_message)
    }

    async fn get_session_history(&self, session_id: &SessionId) -> Result<Vec<Message>, RemoteError> {
        self.record(Call::GetSessionHistory(session_id.clone()));
        replay(&self.history)
    }

    async fn get_session(&self, session_id: &SessionId) -> Result<Option<Session>, RemoteError> {
        self.record(Call::GetSession(session_id.clone()));
        replay(&self.session)
    }
}

pub fn message(text: &str, timestamp: i64, is_user: bool) -> Message {
    Message {
        text: text.to_string(),
        timestamp,
        is_user,
    }
}

//! RemoteConversationService trait definition.
//!
//! The fixed request/response contract of the conversation backend. Mutating
//! calls answer with a tagged [`RemoteResult`]; queries answer with plain
//! values. Every call can additionally fail at the transport level.

use std::future::Future;

use ventrelay_types::error::RemoteError;
use ventrelay_types::remote::RemoteResult;
use ventrelay_types::session::{Message, Session, SessionId};

/// Trait for conversation backends.
///
/// Implementations live in ventrelay-infra (e.g., `HttpConversationService`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition); wrap in
/// [`BoxConversationService`](super::BoxConversationService) for dynamic dispatch.
pub trait RemoteConversationService: Send + Sync {
    /// Open a new session. Takes no arguments; the backend issues the id.
    fn new_session(
        &self,
    ) -> impl Future<Output = Result<RemoteResult<SessionId>, RemoteError>> + Send;

    /// Send a user message within a session and receive the backend's reply.
    fn send_message(
        &self,
        session_id: &SessionId,
        text: &str,
    ) -> impl Future<Output = Result<RemoteResult<Message>, RemoteError>> + Send;

    /// Fetch a session's messages in backend order.
    fn get_session_history(
        &self,
        session_id: &SessionId,
    ) -> impl Future<Output = Result<Vec<Message>, RemoteError>> + Send;

    /// Fetch a whole session, or `None` if the backend has no such session.
    fn get_session(
        &self,
        session_id: &SessionId,
    ) -> impl Future<Output = Result<Option<Session>, RemoteError>> + Send;
}

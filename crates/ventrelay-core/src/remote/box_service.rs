//! BoxConversationService -- object-safe dynamic dispatch wrapper for
//! RemoteConversationService.
//!
//! 1. Define an object-safe `ConversationServiceDyn` trait with boxed futures
//! 2. Blanket-impl `ConversationServiceDyn` for all `T: RemoteConversationService`
//! 3. `BoxConversationService` wraps `Box<dyn ConversationServiceDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use ventrelay_types::error::RemoteError;
use ventrelay_types::remote::RemoteResult;
use ventrelay_types::session::{Message, Session, SessionId};

use super::service::RemoteConversationService;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Object-safe version of [`RemoteConversationService`] with boxed futures.
pub trait ConversationServiceDyn: Send + Sync {
    fn new_session_boxed(&self) -> BoxFuture<'_, Result<RemoteResult<SessionId>, RemoteError>>;

    fn send_message_boxed<'a>(
        &'a self,
        session_id: &'a SessionId,
        text: &'a str,
    ) -> BoxFuture<'a, Result<RemoteResult<Message>, RemoteError>>;

    fn get_session_history_boxed<'a>(
        &'a self,
        session_id: &'a SessionId,
    ) -> BoxFuture<'a, Result<Vec<Message>, RemoteError>>;

    fn get_session_boxed<'a>(
        &'a self,
        session_id: &'a SessionId,
    ) -> BoxFuture<'a, Result<Option<Session>, RemoteError>>;
}

impl<T: RemoteConversationService> ConversationServiceDyn for T {
    fn new_session_boxed(&self) -> BoxFuture<'_, Result<RemoteResult<SessionId>, RemoteError>> {
        Box::pin(self.new_session())
    }

    fn send_message_boxed<'a>(
        &'a self,
        session_id: &'a SessionId,
        text: &'a str,
    ) -> BoxFuture<'a, Result<RemoteResult<Message>, RemoteError>> {
        Box::pin(self.send_message(session_id, text))
    }

    fn get_session_history_boxed<'a>(
        &'a self,
        session_id: &'a SessionId,
    ) -> BoxFuture<'a, Result<Vec<Message>, RemoteError>> {
        Box::pin(self.get_session_history(session_id))
    }

    fn get_session_boxed<'a>(
        &'a self,
        session_id: &'a SessionId,
    ) -> BoxFuture<'a, Result<Option<Session>, RemoteError>> {
        Box::pin(self.get_session(session_id))
    }
}

/// Type-erased conversation backend.
///
/// Lets the application state hold whichever backend was selected at startup
/// (the HTTP transport in production, a mock in tests) without becoming
/// generic itself.
pub struct BoxConversationService {
    inner: Box<dyn ConversationServiceDyn>,
}

impl BoxConversationService {
    /// Wrap a concrete backend in a type-erased box.
    pub fn new<T: RemoteConversationService + 'static>(service: T) -> Self {
        Self {
            inner: Box::new(service),
        }
    }
}

impl RemoteConversationService for BoxConversationService {
    fn new_session(
        &self,
    ) -> impl Future<Output = Result<RemoteResult<SessionId>, RemoteError>> + Send {
        self.inner.new_session_boxed()
    }

    fn send_message(
        &self,
        session_id: &SessionId,
        text: &str,
    ) -> impl Future<Output = Result<RemoteResult<Message>, RemoteError>> + Send {
        async move { self.inner.send_message_boxed(session_id, text).await }
    }

    fn get_session_history(
        &self,
        session_id: &SessionId,
    ) -> impl Future<Output = Result<Vec<Message>, RemoteError>> + Send {
        async move { self.inner.get_session_history_boxed(session_id).await }
    }

    fn get_session(
        &self,
        session_id: &SessionId,
    ) -> impl Future<Output = Result<Option<Session>, RemoteError>> + Send {
        async move { self.inner.get_session_boxed(session_id).await }
    }
}

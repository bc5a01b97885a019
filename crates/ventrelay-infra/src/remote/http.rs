//! HttpConversationService -- [`RemoteConversationService`] over JSON/HTTP.
//!
//! Every backend method is a `POST` to
//! `{host}/api/v1/canisters/{canister_id}/{kind}/{method}`, where `kind` is
//! `call` for mutating methods and `query` for read-only ones. Arguments are
//! sent as a JSON object; results come back as JSON.
//!
//! The underlying `reqwest::Client` pools connections and is cheap to share,
//! so one instance serves every request of the process.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use ventrelay_core::remote::RemoteConversationService;
use ventrelay_types::config::BackendConfig;
use ventrelay_types::error::RemoteError;
use ventrelay_types::remote::RemoteResult;
use ventrelay_types::session::{Message, Session, SessionId};

/// Whether a backend method mutates state.
#[derive(Debug, Clone, Copy)]
enum CallKind {
    Call,
    Query,
}

impl CallKind {
    fn as_path(self) -> &'static str {
        match self {
            CallKind::Call => "call",
            CallKind::Query => "query",
        }
    }
}

#[derive(Serialize)]
struct NoArgs {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionArgs<'a> {
    session_id: &'a SessionId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageArgs<'a> {
    session_id: &'a SessionId,
    text: &'a str,
}

/// JSON/HTTP client for the conversation backend.
#[derive(Clone)]
pub struct HttpConversationService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpConversationService {
    /// Build a transport for the configured host and canister.
    ///
    /// A timeout is applied only when `request_timeout_secs` is set.
    pub fn new(config: &BackendConfig) -> Result<Self, RemoteError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| RemoteError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: format!(
                "{}/api/v1/canisters/{}",
                config.host.trim_end_matches('/'),
                config.canister_id
            ),
        })
    }

    /// Base URL all method paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, kind: CallKind, method: &str) -> String {
        format!("{}/{}/{}", self.base_url, kind.as_path(), method)
    }

    async fn invoke<A, T>(&self, kind: CallKind, method: &str, args: &A) -> Result<T, RemoteError>
    where
        A: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(kind, method);
        debug!(url = %url, "Calling conversation backend");

        let response = self
            .client
            .post(&url)
            .json(args)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RemoteError::Decode(format!("{method}: {e}")))
    }
}

impl RemoteConversationService for HttpConversationService {
    async fn new_session(&self) -> Result<RemoteResult<SessionId>, RemoteError> {
        self.invoke(CallKind::Call, "newSession", &NoArgs {}).await
    }

    async fn send_message(
        &self,
        session_id: &SessionId,
        text: &str,
    ) -> Result<RemoteResult<Message>, RemoteError> {
        let args = SendMessageArgs { session_id, text };
        self.invoke(CallKind::Call, "sendMessage", &args).await
    }

    async fn get_session_history(&self, session_id: &SessionId) -> Result<Vec<Message>, RemoteError> {
        let args = SessionArgs { session_id };
        self.invoke(CallKind::Query, "getSessionHistory", &args).await
    }

    async fn get_session(&self, session_id: &SessionId) -> Result<Option<Session>, RemoteError> {
        let args = SessionArgs { session_id };
        self.invoke(CallKind::Query, "getSession", &args).await
    }
}

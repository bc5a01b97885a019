//! Application state wiring the backend transport to the chat handler.
//!
//! The transport is built once and shared by every request; each request
//! gets its own relay client (and session pointer) from the handler.

use std::sync::Arc;

use ventrelay_core::chat::ChatRequestHandler;
use ventrelay_core::remote::{BoxConversationService, RemoteConversationService};
use ventrelay_infra::remote::HttpConversationService;
use ventrelay_types::config::RelayConfig;

/// Chat handler pinned to the type-erased backend.
pub type ConcreteChatHandler = ChatRequestHandler<BoxConversationService>;

/// Shared application state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ConcreteChatHandler>,
    pub config: Arc<RelayConfig>,
}

impl AppState {
    /// Connect the HTTP transport described by `config`.
    pub fn init(config: RelayConfig) -> anyhow::Result<Self> {
        let transport = HttpConversationService::new(&config.backend)?;
        Ok(Self::with_service(transport, config))
    }

    /// Build state around any backend implementation.
    pub fn with_service<S>(service: S, config: RelayConfig) -> Self
    where
        S: RemoteConversationService + 'static,
    {
        let service = Arc::new(BoxConversationService::new(service));
        Self {
            chat: Arc::new(ChatRequestHandler::new(service)),
            config: Arc::new(config),
        }
    }
}

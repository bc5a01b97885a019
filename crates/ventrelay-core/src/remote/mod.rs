//! Remote conversation backend abstraction.

pub mod box_service;
pub mod service;

pub use box_service::BoxConversationService;
pub use service::RemoteConversationService;

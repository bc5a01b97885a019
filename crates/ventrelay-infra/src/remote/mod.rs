//! Remote conversation backend transports.

pub mod http;

pub use http::HttpConversationService;

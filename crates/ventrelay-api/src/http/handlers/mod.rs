//! HTTP request handlers for the chat API.

pub mod chat;

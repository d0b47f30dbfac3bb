//! Shared types for the chat server.
//!
//! This module defines:
//! - `ClientId`: a lightweight handle for connected clients
//! - channel aliases between connection tasks and the router loop
//! - `RouterRequest`: messages flowing from connections to the router

use tokio::sync::mpsc;

/// Identifier for a connected client.
///
/// This is intentionally opaque; we just guarantee uniqueness over the
/// lifetime of the process. Two clients may coincidentally share a display
/// name, never a `ClientId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub u64);

/// Outbound text lines from the server to a given client.
pub type OutboundTx = mpsc::UnboundedSender<String>;
pub type OutboundRx = mpsc::UnboundedReceiver<String>;

/// One inbound message together with its originating connection.
#[derive(Debug)]
pub struct RouterRequest {
    pub client_id: ClientId,
    pub text: String,
}

/// Channel from connection tasks → router task.
pub type RouterTx = mpsc::UnboundedSender<RouterRequest>;
pub type RouterRx = mpsc::UnboundedReceiver<RouterRequest>;

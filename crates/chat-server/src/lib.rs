//! chat-server
//!
//! Multi-client async TCP chat server with on-demand exchange-rate lookups.

pub mod config;
pub mod registry;
pub mod server;
pub mod types;

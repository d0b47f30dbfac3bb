//! TCP listener and top-level server wiring.
//!
//! This module:
//! - Listens on the configured address/port.
//! - Accepts new TCP connections and registers each one.
//! - Spawns:
//!   - a per-client task to handle I/O,
//!   - a single central router task that dispatches every inbound message.
//!
//! The per-client logic and the dispatch loop live in the `client` and
//! `router_task` submodules.

mod client;
mod router_task;

use std::sync::Arc;

use chat_core::WordPairNames;
use chat_rates::RateLookup;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::config::Config;
use crate::registry::Registry;
use crate::types::{OutboundRx, OutboundTx, RouterRx, RouterTx};

/// Run the chat server with the given configuration.
pub async fn run<R>(config: Config, lookup: R) -> anyhow::Result<()>
where
    R: RateLookup + Clone,
{
    let addr = config.socket_addr_string();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "listening");

    let registry = Arc::new(Registry::new(Box::new(WordPairNames::new())));
    serve(listener, config.max_clients, registry, lookup).await
}

/// Accept loop over an already-bound listener.
///
/// Split out of [`run`] so tests can bind an ephemeral port and inject a
/// deterministic name source and lookup.
pub async fn serve<R>(
    listener: TcpListener,
    max_clients: usize,
    registry: Arc<Registry>,
    lookup: R,
) -> anyhow::Result<()>
where
    R: RateLookup + Clone,
{
    // Channel from connection tasks → router task.
    let (router_tx, router_rx): (RouterTx, RouterRx) = mpsc::unbounded_channel();

    // Spawn the central router task.
    {
        let registry_clone = Arc::clone(&registry);
        tokio::spawn(async move {
            router_task::run_router_loop(router_rx, registry_clone, lookup).await;
        });
    }

    loop {
        let (stream, peer_addr) = listener.accept().await?;

        if registry.len().await >= max_clients {
            warn!(peer = %peer_addr, max_clients, "rejecting connection: client limit reached");
            // Just drop the stream; the client sees the connection close.
            continue;
        }

        // Outbound channel feeding this client's writer task.
        let (out_tx, out_rx): (OutboundTx, OutboundRx) = mpsc::unbounded_channel();
        let (client_id, _name) = registry.register(peer_addr, out_tx).await;

        // Clone handles to move into the client task.
        let registry_clone = Arc::clone(&registry);
        let router_tx_clone = router_tx.clone();

        tokio::spawn(async move {
            if let Err(e) =
                client::run_client(client_id, stream, router_tx_clone, out_rx, registry_clone).await
            {
                warn!(client = client_id.0, error = %e, "client connection ended with error");
            }
        });
    }
}

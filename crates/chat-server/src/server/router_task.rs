//! Central dispatch loop.
//!
//! One task processes every inbound message in arrival order and decides
//! between the two dispatch modes:
//! - command mode: run the rate lookup, reply to the sender only,
//! - chat mode: prefix the text with the sender's name and broadcast it to
//!   everyone, the sender included.
//!
//! Lookups are spawned onto the runtime so a slow archive response never
//! delays chat traffic from other connections.

use std::sync::Arc;

use chat_core::{classify, Dispatch};
use chat_rates::{RateLookup, LOOKUP_FAILED};
use tracing::{debug, warn};

use crate::registry::Registry;
use crate::types::{RouterRequest, RouterRx};

/// Run the central dispatch loop until all connection tasks are gone.
pub async fn run_router_loop<R>(mut router_rx: RouterRx, registry: Arc<Registry>, lookup: R)
where
    R: RateLookup + Clone,
{
    while let Some(request) = router_rx.recv().await {
        let RouterRequest { client_id, text } = request;

        match classify(&text) {
            Dispatch::Lookup { code } => {
                let registry = Arc::clone(&registry);
                let lookup = lookup.clone();
                tokio::spawn(async move {
                    let reply = match lookup.lookup(&code).await {
                        Ok(quote) => quote.to_string(),
                        Err(e) => {
                            warn!(%code, error = %e, "rate lookup failed");
                            LOOKUP_FAILED.to_string()
                        }
                    };

                    if !registry.send_to(client_id, reply).await {
                        debug!(client = client_id.0, "requester left before the reply");
                    }
                });
            }
            Dispatch::Chat => {
                // The sender may have unregistered right after sending.
                let Some(name) = registry.name_of(client_id).await else {
                    debug!(client = client_id.0, "dropping chat from closed connection");
                    continue;
                };

                registry.broadcast(&format!("{name}: {text}")).await;
            }
        }
    }

    debug!("router loop shutting down (router_rx closed)");
}

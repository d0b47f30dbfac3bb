//! The connection registry, the only shared mutable state in the server.
//!
//! Membership invariant: a client is in the set if and only if its receive
//! loop is active. `register` and `unregister` are the only mutations, both
//! behind one `RwLock`. Broadcasts work from a point-in-time snapshot, so a
//! client disconnecting mid-broadcast never affects delivery to the others.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};

use chat_core::NameSource;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::types::{ClientId, OutboundTx};

/// Registry entry for one live connection.
#[derive(Debug, Clone)]
pub struct Peer {
    /// Display name, assigned once at registration.
    pub name: String,

    /// Remote endpoint, kept for logging.
    pub addr: SocketAddr,

    /// Sender feeding the connection's writer task.
    pub out_tx: OutboundTx,
}

/// The set of currently live connections.
pub struct Registry {
    next_id: AtomicU64,
    names: Box<dyn NameSource>,
    peers: RwLock<HashMap<ClientId, Peer>>,
}

impl Registry {
    pub fn new(names: Box<dyn NameSource>) -> Self {
        Registry {
            next_id: AtomicU64::new(1),
            names,
            peers: RwLock::new(HashMap::new()),
        }
    }

    /// Add a newly accepted connection and assign it a display name.
    pub async fn register(&self, addr: SocketAddr, out_tx: OutboundTx) -> (ClientId, String) {
        let id = ClientId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let name = self.names.next_name();

        let mut peers = self.peers.write().await;
        peers.insert(
            id,
            Peer {
                name: name.clone(),
                addr,
                out_tx,
            },
        );
        drop(peers);

        info!(client = id.0, peer = %addr, %name, "client connected");
        (id, name)
    }

    /// Remove a connection. A no-op when the id is not a member.
    pub async fn unregister(&self, id: ClientId) -> Option<Peer> {
        let removed = self.peers.write().await.remove(&id);
        if let Some(peer) = &removed {
            info!(client = id.0, peer = %peer.addr, name = %peer.name, "client disconnected");
        }
        removed
    }

    /// Display name of a live connection.
    pub async fn name_of(&self, id: ClientId) -> Option<String> {
        self.peers.read().await.get(&id).map(|peer| peer.name.clone())
    }

    /// Number of live connections.
    pub async fn len(&self) -> usize {
        self.peers.read().await.len()
    }

    /// Point-in-time view of the membership for broadcasting.
    pub async fn snapshot(&self) -> Vec<(ClientId, OutboundTx)> {
        let peers = self.peers.read().await;
        peers
            .iter()
            .map(|(id, peer)| (*id, peer.out_tx.clone()))
            .collect()
    }

    /// Send one line to every connection in the current snapshot.
    ///
    /// Each send is independent: a recipient that disconnected between the
    /// snapshot and the send is skipped without affecting the rest.
    pub async fn broadcast(&self, line: &str) {
        for (id, out_tx) in self.snapshot().await {
            if out_tx.send(line.to_string()).is_err() {
                debug!(client = id.0, "skipping delivery to closed connection");
            }
        }
    }

    /// Send one line to a single connection. Returns `false` when the
    /// connection is gone.
    pub async fn send_to(&self, id: ClientId, line: String) -> bool {
        let peers = self.peers.read().await;
        match peers.get(&id) {
            Some(peer) => peer.out_tx.send(line).is_ok(),
            None => false,
        }
    }
}

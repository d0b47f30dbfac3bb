//! Per-connection I/O.
//!
//! Each accepted connection gets:
//! - a writer task draining its outbound channel onto the socket,
//! - a reader loop splitting the byte stream into lines and handing each
//!   line to the router.
//!
//! The connection is unregistered at exactly one point, after the reader
//! loop returns, whichever way it ended. EOF is a clean close and is not
//! an error; any other I/O failure is.

use std::io;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tracing::{debug, warn};

use crate::registry::Registry;
use crate::types::{ClientId, OutboundRx, RouterRequest, RouterTx};

/// Run the I/O loops for a single connection.
pub async fn run_client(
    client_id: ClientId,
    stream: TcpStream,
    router_tx: RouterTx,
    out_rx: OutboundRx,
    registry: Arc<Registry>,
) -> io::Result<()> {
    let (read_half, write_half) = stream.into_split();

    // Writer task: consume outbound lines and write them to the socket.
    let _writer_handle = tokio::spawn(run_writer(client_id, write_half, out_rx));

    let result = run_reader(client_id, read_half, router_tx).await;

    // Guaranteed cleanup: every exit path of the reader ends up here.
    registry.unregister(client_id).await;

    result
}

async fn run_writer(client_id: ClientId, mut write_half: OwnedWriteHalf, mut out_rx: OutboundRx) {
    while let Some(line) = out_rx.recv().await {
        let framed = format!("{line}\n");
        if let Err(e) = write_half.write_all(framed.as_bytes()).await {
            warn!(client = client_id.0, error = %e, "write failed, dropping outbound queue");
            break;
        }
        if let Err(e) = write_half.flush().await {
            warn!(client = client_id.0, error = %e, "flush failed, dropping outbound queue");
            break;
        }
    }
}

async fn run_reader(
    client_id: ClientId,
    mut read_half: OwnedReadHalf,
    router_tx: RouterTx,
) -> io::Result<()> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        match read_half.read(&mut chunk).await {
            // EOF: the client closed the connection cleanly.
            Ok(0) => return Ok(()),
            Ok(n) => {
                buffer.extend_from_slice(&chunk[..n]);

                // Hand over complete lines.
                while let Some(newline_pos) = buffer.iter().position(|&b| b == b'\n') {
                    let line: Vec<u8> = buffer.drain(..=newline_pos).collect();
                    let text = String::from_utf8_lossy(&line).trim().to_string();

                    if text.is_empty() {
                        continue;
                    }

                    debug!(client = client_id.0, %text, "received message");

                    let request = RouterRequest { client_id, text };
                    if router_tx.send(request).is_err() {
                        // Router gone; nothing left to serve.
                        return Ok(());
                    }
                }
            }
            Err(e) => return Err(e),
        }
    }
}

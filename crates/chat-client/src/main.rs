//! Interactive chat client.
//!
//! Connects to the chat server, forwards stdin lines, and prints every
//! line the server sends. Plain chat is broadcast to everyone; a line like
//! `exchange usd` gets a private quote reply.

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::info;

#[derive(Parser)]
#[clap(name = "chat-client")]
#[clap(about = "Line-based client for the chat server")]
struct Cli {
    /// Server address
    #[clap(short, long, default_value = "127.0.0.1:8080")]
    server: String,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt::init();
    }

    info!(server = %cli.server, "connecting");
    let stream = TcpStream::connect(&cli.server).await?;
    println!("Connected to {}.", cli.server);
    println!("Type a message to chat, 'exchange <code>' for a quote,");
    println!("or 'quit' / 'exit' to leave.\n");

    let (read_half, mut write_half) = stream.into_split();
    let mut server_lines = BufReader::new(read_half).lines();
    let mut stdin_lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = server_lines.next_line() => match line? {
                Some(line) => println!("{line}"),
                None => {
                    println!("Server closed the connection.");
                    break;
                }
            },
            line = stdin_lines.next_line() => {
                let Some(line) = line? else {
                    // EOF on stdin.
                    break;
                };

                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
                    println!("Exiting client.");
                    break;
                }

                write_half.write_all(format!("{trimmed}\n").as_bytes()).await?;
            }
        }
    }

    Ok(())
}

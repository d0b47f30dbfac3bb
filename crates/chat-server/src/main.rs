//! TCP chat server binary.

use chat_rates::PrivatBankClient;
use chat_server::config::Config;
use chat_server::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let lookup = PrivatBankClient::new();

    server::run(config, lookup).await
}

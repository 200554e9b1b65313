use anyhow::Context;
use arguments::Arguments;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

mod arguments;
mod connection;
mod server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Arguments::parse();

    let listener = TcpListener::bind(args.socket)
        .await
        .with_context(|| format!("Failed to bind {}", args.socket))?;
    info!("Listening on {}", listener.local_addr()?);

    server::run(listener).await
}

use anyhow::Context;
use arguments::Arguments;
use clap::Parser;
use futures::future::try_join_all;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

mod arguments;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Arguments::parse();

    let handles = (0..args.connections)
        .map(|id| {
            tokio::spawn(blast(
                args.server,
                id,
                args.payload,
                args.rounds,
                args.seed.wrapping_add(id as u64),
            ))
        })
        .collect::<Vec<_>>();

    try_join_all(handles)
        .await
        .context("Failed to join")?
        .into_iter()
        .collect::<anyhow::Result<Vec<_>>>()
        .context("Failed to run echo clients")?;

    log::info!(
        "{} connections each echoed {} bytes",
        args.connections,
        args.payload * args.rounds
    );
    Ok(())
}

async fn blast(
    server: SocketAddr,
    id: usize,
    payload: usize,
    rounds: usize,
    seed: u64,
) -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stream = TcpStream::connect(server)
        .await
        .with_context(|| format!("Connection {id} failed to connect"))?;

    for round in 0..rounds {
        let sent = (0..payload).map(|_| rng.gen()).collect::<Vec<u8>>();
        stream.write_all(&sent).await?;
        let mut echoed = vec![0; sent.len()];
        stream.read_exact(&mut echoed).await?;
        anyhow::ensure!(
            sent == echoed,
            "Connection {id} received a mangled echo in round {round}"
        );
        log::debug!("Connection {id} finished round {round}");
    }
    Ok(())
}

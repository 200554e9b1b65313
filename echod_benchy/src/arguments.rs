use clap::Parser;
use std::net::SocketAddr;

#[derive(Debug, Parser)]
#[command(author, version)]
pub struct Arguments {
    /// TCP server socket to connect to
    #[arg(short, long, default_value = "127.0.0.1:32123")]
    pub server: SocketAddr,

    /// Number of concurrent connections
    #[arg(short, long, default_value_t = 64)]
    pub connections: usize,

    /// Payload bytes sent per round
    #[arg(short, long, default_value_t = 1024)]
    pub payload: usize,

    /// Rounds per connection
    #[arg(short, long, default_value_t = 16)]
    pub rounds: usize,

    /// Base RNG seed, each connection derives its own stream from it
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

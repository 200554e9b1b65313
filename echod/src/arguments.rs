use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(author, version)]
pub struct Arguments {
    /// Socket to bind on
    #[arg(short, long, default_value = "0.0.0.0:32123")]
    pub socket: SocketAddr,
}

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::{fmt::Display, net::SocketAddr};

pub fn parse_hex_digit(s: &str) -> anyhow::Result<u8> {
    u8::from_str_radix(s, 16).context("Failed to parse hex byte")
}

#[derive(Copy, Debug, Clone, Default, ValueEnum)]
pub enum LineEnding {
    #[default]
    Newline,
    CrLf,
    None,
}

impl LineEnding {
    pub fn bytes(self) -> &'static [u8] {
        match self {
            Self::Newline => b"\n",
            Self::CrLf => b"\r\n",
            Self::None => b"",
        }
    }
}

impl Display for LineEnding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

#[derive(Parser, Debug)]
#[command(author, version)]
pub struct Arguments {
    /// Echo server to connect to
    #[arg(short, long, default_value = "127.0.0.1:32123")]
    pub server: SocketAddr,

    /// Line ending appended to each line sent from the repl
    #[arg(short, long, default_value_t)]
    pub ending: LineEnding,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Debug, Subcommand)]
pub enum Action {
    /// Send raw hex bytes once and check what comes back
    Send {
        /// Bytes to send (hexadecimal)
        #[arg(num_args = 1.., value_delimiter = ' ', value_parser = parse_hex_digit)]
        bytes: Vec<u8>,
    },
    /// Interactive session, every line is checked against its echo
    Repl,
}

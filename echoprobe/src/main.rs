use anyhow::Context;
use arguments::{Action, Arguments, LineEnding};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::Editor;
use std::io::{Read, Write};
use std::net::TcpStream;

mod arguments;

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();

    let mut stream =
        TcpStream::connect(args.server).context("Failed to connect to echo server")?;

    match args.action {
        Action::Send { bytes } => {
            let echoed = roundtrip(&mut stream, &bytes)?;
            println!("{}", to_hex(&echoed));
            anyhow::ensure!(echoed == bytes, "Echo does not match what was sent");
        }
        Action::Repl => repl(&mut stream, args.ending)?,
    }
    Ok(())
}

fn repl(stream: &mut TcpStream, ending: LineEnding) -> anyhow::Result<()> {
    let mut rl = Editor::<(), rustyline::history::DefaultHistory>::new()?;
    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                rl.add_history_entry(line.as_str());
                let mut payload = line.into_bytes();
                payload.extend_from_slice(ending.bytes());
                if payload.is_empty() {
                    continue;
                }
                let echoed = roundtrip(stream, &payload)?;
                if echoed == payload {
                    print!("<< {}", String::from_utf8_lossy(&echoed));
                    if !echoed.ends_with(b"\n") {
                        println!();
                    }
                } else {
                    println!("Echo mismatch: sent {} got {}", to_hex(&payload), to_hex(&echoed));
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {err:?}");
                break;
            }
        }
    }
    Ok(())
}

fn roundtrip(stream: &mut TcpStream, payload: &[u8]) -> anyhow::Result<Vec<u8>> {
    stream.write_all(payload).context("Failed to send payload")?;
    let mut echoed = vec![0; payload.len()];
    stream
        .read_exact(&mut echoed)
        .context("Server closed before echoing everything back")?;
    Ok(echoed)
}

fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

use crate::connection::handle_connection;
use tokio::net::TcpListener;
use tokio_util::codec::{BytesCodec, FramedRead, FramedWrite};
use tracing::{debug, warn};

/// Accepts connections forever, one echo task per connection.
///
/// A failed accept does not tear down the listener; the error is logged and
/// the loop keeps going. Connection errors stay inside their own task.
pub async fn run(listener: TcpListener) -> anyhow::Result<()> {
    loop {
        match listener.accept().await {
            Ok((mut stream, addr)) => {
                debug!("Accepted connection from {addr}");
                tokio::spawn(async move {
                    let (reader, writer) = stream.split();
                    let reader = FramedRead::new(reader, BytesCodec::new());
                    let writer = FramedWrite::new(writer, BytesCodec::new());
                    if let Err(e) = handle_connection(reader, writer).await {
                        warn!("Connection from {addr} ended with error: {e:#}");
                    }
                    debug!("Connection from {addr} closed");
                });
            }
            Err(e) => {
                warn!("Failed to accept connection: {e:#}");
            }
        }
    }
}

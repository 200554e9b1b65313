use bytes::{Bytes, BytesMut};
use futures::{Sink, SinkExt, Stream, StreamExt};

/// Forwards every chunk back into the same connection until EOF or error,
/// then closes the write side.
pub async fn handle_connection<R, W>(mut reader: R, mut writer: W) -> anyhow::Result<()>
where
    R: Stream<Item = Result<BytesMut, std::io::Error>> + Unpin,
    W: Sink<Bytes, Error = std::io::Error> + Unpin,
{
    while let Some(chunk) = reader.next().await {
        writer.send(chunk?.freeze()).await?;
    }
    writer.close().await?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::handle_connection;
    use tokio_test::io::Builder;
    use tokio_util::codec::{BytesCodec, FramedRead, FramedWrite};

    #[tokio::test]
    async fn echoes_chunks_in_order() {
        let stream = Builder::new()
            .read(b"hello")
            .write(b"hello")
            .read(b", world")
            .write(b", world")
            .build();
        let (reader, writer) = tokio::io::split(stream);
        let reader = FramedRead::new(reader, BytesCodec::new());
        let writer = FramedWrite::new(writer, BytesCodec::new());
        handle_connection(reader, writer).await.unwrap();
    }

    #[tokio::test]
    async fn immediate_eof_writes_nothing() {
        let stream = Builder::new().build();
        let (reader, writer) = tokio::io::split(stream);
        let reader = FramedRead::new(reader, BytesCodec::new());
        let writer = FramedWrite::new(writer, BytesCodec::new());
        handle_connection(reader, writer).await.unwrap();
    }

    #[tokio::test]
    async fn binary_payload_passes_through_unchanged() {
        let payload = [0x00, 0xff, 0x7f, 0x80, 0x0a, 0x0d];
        let stream = Builder::new().read(&payload).write(&payload).build();
        let (reader, writer) = tokio::io::split(stream);
        let reader = FramedRead::new(reader, BytesCodec::new());
        let writer = FramedWrite::new(writer, BytesCodec::new());
        handle_connection(reader, writer).await.unwrap();
    }
}

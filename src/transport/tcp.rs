//! # Raw TCP Transport
//!
//! Sends a print stream to a port-9100 (JetDirect style) listener: connect,
//! write the bytes, shut down. There is no handshake and no status channel.
//! Works against the virtual printer's own listener and against real
//! network printers.

use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{debug, info};

use crate::error::BoletaError;

/// Default raw printing port.
pub const RAW_PORT: u16 = 9100;

/// Timeout for connecting.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Write size; each chunk is logged as progress.
const CHUNK_SIZE: usize = 4096;

/// Send `data` to `addr` (`host:port`). Returns the number of bytes written.
pub async fn send_raw(addr: &str, data: &[u8]) -> Result<usize, BoletaError> {
    info!(addr, total = data.len(), "connecting via raw TCP");

    let mut stream = tokio::time::timeout(CONNECT_TIMEOUT, TcpStream::connect(addr))
        .await
        .map_err(|_| {
            BoletaError::Transport(format!(
                "Connection to {} timed out after {}s",
                addr,
                CONNECT_TIMEOUT.as_secs()
            ))
        })?
        .map_err(|e| BoletaError::Transport(format!("Failed to connect to {}: {}", addr, e)))?;

    let mut sent = 0;
    for chunk in data.chunks(CHUNK_SIZE) {
        stream.write_all(chunk).await.map_err(|e| {
            BoletaError::Transport(format!("Send failed at byte {}: {}", sent, e))
        })?;
        sent += chunk.len();
        debug!(sent, total = data.len(), "raw TCP progress");
    }

    stream
        .flush()
        .await
        .map_err(|e| BoletaError::Transport(format!("Flush failed: {}", e)))?;
    stream
        .shutdown()
        .await
        .map_err(|e| BoletaError::Transport(format!("Shutdown failed: {}", e)))?;

    info!(addr, total = sent, "print stream sent");
    Ok(sent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_send_raw_delivers_bytes() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            stream.read_to_end(&mut received).await.unwrap();
            received
        });

        let payload: Vec<u8> = (0..10_000u32).map(|i| i as u8).collect();
        let sent = send_raw(&addr, &payload).await.unwrap();
        assert_eq!(sent, payload.len());
        assert_eq!(server.await.unwrap(), payload);
    }

    #[tokio::test]
    async fn test_send_raw_connection_refused() {
        // Bind then drop to get a port nobody listens on
        let addr = {
            let l = TcpListener::bind("127.0.0.1:0").await.unwrap();
            l.local_addr().unwrap().to_string()
        };
        let err = send_raw(&addr, b"x").await.unwrap_err();
        assert!(matches!(err, BoletaError::Transport(_)));
    }
}

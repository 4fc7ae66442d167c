//! Raw print stream listener.
//!
//! Every accepted connection gets its own task that feeds whatever it reads
//! straight into the shared printer. Nothing is ever written back.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn};

use crate::printer::VirtualPrinter;

/// Read size per `feed` call.
const CHUNK_SIZE: usize = 4096;

/// Pause after a failed accept (e.g. out of file descriptors).
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Accept connections forever.
pub async fn run(listener: TcpListener, printer: Arc<VirtualPrinter>, reset_on_connect: bool) {
    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                info!(peer = %peer, "print connection opened");
                if reset_on_connect {
                    printer.reset();
                }
                let printer = printer.clone();
                tokio::spawn(async move {
                    match handle_connection(stream, &printer).await {
                        Ok(total) => info!(peer = %peer, total, "print connection closed"),
                        Err(e) => warn!(peer = %peer, error = %e, "print connection failed"),
                    }
                });
            }
            Err(e) => {
                error!(error = %e, "failed to accept connection");
                tokio::time::sleep(ACCEPT_BACKOFF).await;
            }
        }
    }
}

/// Bind `addr` and log the bound address.
pub async fn bind(addr: &str) -> std::io::Result<(TcpListener, SocketAddr)> {
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    info!(addr = %local, "raw print listener ready");
    Ok((listener, local))
}

/// Feed the connection's bytes until EOF. Returns the byte count.
async fn handle_connection(
    mut stream: TcpStream,
    printer: &VirtualPrinter,
) -> std::io::Result<usize> {
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total = 0;
    loop {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            return Ok(total);
        }
        printer.feed(&buf[..n]);
        total += n;
        debug!(n, total, "received");
    }
}

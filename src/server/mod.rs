//! # Virtual Printer Server
//!
//! Two listeners share one [`VirtualPrinter`]:
//!
//! - a raw TCP listener (port 9100 style) that feeds every received byte to
//!   the printer, see [`ingest`]
//! - an optional HTTP API for viewing and driving the document
//!
//! ## Usage
//!
//! ```bash
//! boleta serve --listen 0.0.0.0:9100 --http 127.0.0.1:8080
//! printf 'Hello\n\x1dV\x00' | nc localhost 9100
//! curl localhost:8080/api/document
//! ```
//!
//! ## HTTP Routes
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /api/status` | Profile, column limit, revision, last activity |
//! | `GET /api/document` | Elements with revision |
//! | `GET /api/document/wait?since=N` | Long-poll for the next revision |
//! | `GET /api/document/bitmaps/:index` | Bitmap element as PNG |
//! | `POST /api/print` | Feed the request body |
//! | `POST /api/reset` | Clear the document |

mod handlers;
pub mod ingest;
pub mod state;

pub use state::{AppState, ServerConfig};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::BoletaError;
use crate::printer::VirtualPrinter;

/// Upload limit for `POST /api/print`; full-width raster logos are large.
const MAX_PRINT_BODY: usize = 16 * 1024 * 1024;

/// Build the HTTP API router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/status", get(handlers::document::status))
        .route("/api/document", get(handlers::document::document))
        .route("/api/document/wait", get(handlers::document::wait))
        .route(
            "/api/document/bitmaps/:index",
            get(handlers::document::bitmap),
        )
        .route(
            "/api/print",
            post(handlers::document::print).layer(DefaultBodyLimit::max(MAX_PRINT_BODY)),
        )
        .route("/api/reset", post(handlers::document::reset))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the listeners until Ctrl-C.
///
/// ## Example
///
/// ```no_run
/// use std::sync::Arc;
/// use boleta::printer::VirtualPrinter;
/// use boleta::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), boleta::BoletaError> {
/// let printer = Arc::new(VirtualPrinter::new());
/// serve(ServerConfig::default(), printer).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig, printer: Arc<VirtualPrinter>) -> Result<(), BoletaError> {
    let state = AppState::new(printer.clone());

    let (listener, _) = ingest::bind(&config.listen_addr).await.map_err(|e| {
        BoletaError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
    })?;
    let ingest_task = tokio::spawn(ingest::run(listener, printer, config.reset_on_connect));

    match &config.http_addr {
        Some(addr) => {
            let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
                BoletaError::Transport(format!("Failed to bind to {}: {}", addr, e))
            })?;
            info!(addr = %addr, "HTTP API listening");

            axum::serve(listener, router(state))
                .with_graceful_shutdown(shutdown_signal())
                .await
                .map_err(|e| BoletaError::Transport(format!("Server error: {}", e)))?;
        }
        None => shutdown_signal().await,
    }

    ingest_task.abort();
    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

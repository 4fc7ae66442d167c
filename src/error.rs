//! # Error Types
//!
//! This module defines error types used by the outer layers of boleta
//! (network listeners, HTTP API, CLI, PNG export).
//!
//! The decoder itself never fails: every byte sequence, however malformed,
//! leaves it in a state ready to continue.

use thiserror::Error;

/// Main error type for boleta operations
#[derive(Debug, Error)]
pub enum BoletaError {
    /// Transport-level errors (bind, connect, send)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid command-line or API argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Image export error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

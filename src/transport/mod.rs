//! # Printer Transport Layer
//!
//! Clients for delivering print streams to a printer, real or virtual.
//!
//! ## Available Transports
//!
//! - [`tcp`]: Raw TCP (port 9100)

pub mod tcp;

pub use tcp::{send_raw, RAW_PORT};

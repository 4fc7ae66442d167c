//! # Printer Module
//!
//! The virtual printer and the paper profiles it can emulate.
//!
//! ## Modules
//!
//! - [`config`]: Paper profiles
//! - [`emulator`]: Shared, thread-safe ingestion facade

pub mod config;
pub mod emulator;

pub use config::PrinterConfig;
pub use emulator::{RepaintHandler, VirtualPrinter};

//! # Boleta - Virtual ESC/POS Receipt Printer
//!
//! Boleta emulates a thermal receipt printer in software. It accepts the
//! same byte stream a real ESC/POS printer would and turns it into a
//! structured document of styled text runs, line breaks, cuts and bitmaps.
//! It provides:
//!
//! - **Decoder**: A resumable byte-at-a-time ESC/POS state machine
//! - **Document model**: Styled text runs, newlines, cuts and bit images
//! - **Rendering**: Plain-text and PNG views of a document
//! - **Server**: Raw TCP ingestion (port 9100) and an HTTP API
//! - **Protocol**: Command encoders for building test streams
//!
//! ## Quick Start
//!
//! ```
//! use boleta::{VirtualPrinter, document::Element};
//!
//! let printer = VirtualPrinter::new();
//! printer.set_repaint_handler(|| println!("document changed"));
//!
//! // Streams may arrive in arbitrary pieces
//! printer.feed(b"\x1b!\x30BIG\n");
//! printer.feed(b"\x1dV");
//! printer.feed(b"\x00");
//!
//! let doc = printer.snapshot();
//! assert_eq!(doc.len(), 3);
//! assert_eq!(doc[2], Element::Cut);
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`decoder`] | ESC/POS byte stream state machine |
//! | [`document`] | Document elements and formatting state |
//! | [`printer`] | Thread-safe virtual printer and paper profiles |
//! | [`protocol`] | Command encoders and code pages |
//! | [`render`] | Text and PNG rendering, bitmap conversion |
//! | [`server`] | Raw TCP listener and HTTP API |
//! | [`transport`] | Raw TCP client |
//! | [`error`] | Error types |

pub mod decoder;
pub mod document;
pub mod error;
pub mod printer;
pub mod protocol;
pub mod receipt;
pub mod render;
pub mod server;
pub mod transport;

// Re-exports for convenience
pub use error::BoletaError;
pub use printer::{PrinterConfig, VirtualPrinter};

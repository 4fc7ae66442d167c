//! # Rendering Module
//!
//! Consumers of document snapshots. Nothing here touches the decoder; every
//! function works on copies returned by
//! [`VirtualPrinter::snapshot`](crate::printer::VirtualPrinter::snapshot).
//!
//! ## Modules
//!
//! - [`bitmap`]: Column-major → row-major transpose, padded raster rows
//! - [`png`]: Bitmap elements as PNG images
//! - [`text`]: Whole document as monospaced text
//!
//! ## Usage Example
//!
//! ```
//! use boleta::printer::VirtualPrinter;
//! use boleta::render;
//!
//! let printer = VirtualPrinter::new();
//! printer.feed(b"Hello\n");
//!
//! let text = render::text::render(&printer.snapshot(), 32);
//! assert_eq!(text, "Hello\n");
//! ```

pub mod bitmap;
pub mod png;
pub mod text;

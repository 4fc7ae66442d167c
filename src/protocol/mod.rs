//! # ESC/POS Protocol
//!
//! This module holds everything about the wire format the virtual printer
//! parses: command encoders and character code tables.
//!
//! ## Module Structure
//!
//! - [`commands`]: Control codes, print mode, line spacing, cutter
//! - [`graphics`]: Raster and downloaded bit images
//! - [`codepage`]: Extended byte → character tables (`ESC t n`)
//!
//! ## Usage Example
//!
//! ```
//! use boleta::protocol::{commands, graphics};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(commands::emphasis(true));
//! data.extend(b"TOTAL 12.50\n");
//! data.extend(commands::emphasis(false));
//! data.extend(graphics::raster(1, 8, &[0xFF; 8]));
//! data.extend(commands::cut(commands::CutMode::Full));
//!
//! // Send `data` to the emulator via transport::tcp::send_raw...
//! ```

pub mod codepage;
pub mod commands;
pub mod graphics;

//! # ESC/POS Stream Decoder
//!
//! A byte-at-a-time state machine that turns a raw print stream into a
//! [`Document`].
//!
//! The decoder keeps all of its progress in [`State`] and the two bit image
//! assembly buffers, so a stream may be split anywhere (between ESC and its
//! parameter, inside a bit image header, in the middle of a payload) and fed
//! in any number of calls.
//!
//! ## Recognized Commands
//!
//! | Bytes | Effect |
//! |-------|--------|
//! | LF | End line |
//! | CR | Ignored |
//! | ESC @ | Initialize |
//! | ESC ! n | Print mode (emphasis, double height/width, underline) |
//! | ESC E n | Emphasis (shown red) |
//! | ESC - n | Underline |
//! | ESC d n | Feed n lines |
//! | ESC 2 / ESC 3 n | Default / fixed line spacing |
//! | ESC t n | Code page |
//! | ESC c 4 n, ESC c 5 n | Accepted, ignored |
//! | GS V m [n] | Cut |
//! | GS v 0 m xL xH yL yH d... | Raster bit image |
//! | GS * x y d... | Define downloaded bit image |
//! | GS / m | Print downloaded bit image |
//!
//! Any other byte after ESC or GS drops that command and returns to normal
//! text mode. Other control bytes below 0x20, and 0xFF, are discarded.
//!
//! ## Example
//!
//! ```
//! use boleta::decoder::Decoder;
//! use boleta::document::Element;
//!
//! let mut decoder = Decoder::new();
//! decoder.feed(b"A\n");
//! decoder.feed(b"B");
//!
//! assert_eq!(
//!     decoder.snapshot(),
//!     vec![
//!         Element::text("A"),
//!         Element::NewLine { spacing: None },
//!         Element::text("B"),
//!     ]
//! );
//! ```

mod state;

pub use state::{DownloadAssembly, DownloadedBitmap, RasterAssembly, State};

use tracing::{debug, trace};

use crate::document::{Bitmap, BitmapFormat, Document, Element};
use crate::protocol::codepage;
use crate::protocol::commands::{CR, DEFAULT_LINE_SPACING, ESC, GS, LF};
use crate::protocol::graphics::DownloadScale;

/// Incremental decoder owning the document it produces.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    state: State,
    document: Document,
    raster: RasterAssembly,
    download: DownloadAssembly,
    downloaded: Option<DownloadedBitmap>,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume a chunk of the stream. Never fails; incomplete commands wait
    /// for the next call.
    pub fn feed(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.step(byte);
        }
    }

    /// Current parser state.
    pub fn state(&self) -> State {
        self.state
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The image stored by the last complete `GS *`, if any.
    pub fn downloaded_bitmap(&self) -> Option<&DownloadedBitmap> {
        self.downloaded.as_ref()
    }

    /// Copy of the document including the pending text run.
    pub fn snapshot(&self) -> Vec<Element> {
        self.document.snapshot()
    }

    /// Parser reset: abandon any partial command or payload and apply the
    /// initialize semantics. The downloaded bitmap and code page survive.
    pub fn reset(&mut self) {
        self.state = State::Normal;
        self.raster = RasterAssembly::default();
        self.download = DownloadAssembly::default();
        self.document.reset();
    }

    fn step(&mut self, byte: u8) {
        trace!(state = ?self.state, byte, "decode");
        self.state = self.transition(byte);
    }

    /// Apply one byte and return the next state.
    fn transition(&mut self, b: u8) -> State {
        match self.state {
            State::Normal => self.normal(b),

            State::Escape => self.escape(b),
            State::EscBang => {
                self.document.update_formatting(|f| {
                    f.style.red = b & 0x08 != 0;
                    f.style.double_height = b & 0x10 != 0;
                    f.style.double_width = b & 0x20 != 0;
                    f.style.underline = b & 0x80 != 0;
                });
                State::Normal
            }
            State::EscEmphasis => {
                self.document.update_formatting(|f| f.style.red = b & 1 == 1);
                State::Normal
            }
            State::EscUnderline => {
                self.document
                    .update_formatting(|f| f.style.underline = !matches!(b, 0 | b'0'));
                State::Normal
            }
            State::EscFeedLines => {
                self.document.flush();
                for _ in 0..b {
                    self.document.new_line();
                }
                State::Normal
            }
            State::EscLineSpacing => {
                self.document.update_formatting(|f| f.line_spacing = Some(b));
                State::Normal
            }
            State::EscCodePage => {
                self.document.update_formatting(|f| f.code_page = b);
                State::Normal
            }
            State::EscPanel => match b {
                b'4' => State::EscPanel4,
                b'5' => State::EscPanel5,
                _ => {
                    debug!(byte = b, "unknown ESC c command dropped");
                    State::Normal
                }
            },
            State::EscPanel4 | State::EscPanel5 => State::Normal,

            State::GroupSep => self.group_sep(b),
            State::Cut => match b {
                65 | 66 => State::CutFeed,
                _ => {
                    self.document.append(Element::Cut);
                    State::Normal
                }
            },
            State::CutFeed => {
                self.document.append(Element::Cut);
                State::Normal
            }

            State::Raster => match b {
                b'0' => State::RasterMode,
                _ => {
                    debug!(byte = b, "unknown GS v command dropped");
                    State::Normal
                }
            },
            State::RasterMode => {
                self.raster.mode = b;
                State::RasterWidthLow
            }
            State::RasterWidthLow => {
                self.raster.width_bytes = b as u16;
                State::RasterWidthHigh
            }
            State::RasterWidthHigh => {
                self.raster.width_bytes += (b as u16) << 8;
                State::RasterHeightLow
            }
            State::RasterHeightLow => {
                self.raster.height_dots = b as u16;
                State::RasterHeightHigh
            }
            State::RasterHeightHigh => {
                self.raster.height_dots += (b as u16) << 8;
                if self.raster.begin() {
                    State::RasterData
                } else {
                    debug!(
                        width_bytes = self.raster.width_bytes,
                        height = self.raster.height_dots,
                        "empty raster image skipped"
                    );
                    State::Normal
                }
            }
            State::RasterData => {
                if self.raster.push(b) {
                    self.finish_raster();
                    State::Normal
                } else {
                    State::RasterData
                }
            }

            State::DownloadWidth => {
                self.download.width_bytes = b;
                State::DownloadHeight
            }
            State::DownloadHeight => {
                self.download.height_bytes = b;
                if self.download.begin() {
                    State::DownloadData
                } else {
                    debug!(
                        x = self.download.width_bytes,
                        y = self.download.height_bytes,
                        "empty download image skipped"
                    );
                    State::Normal
                }
            }
            State::DownloadData => {
                if self.download.push(b) {
                    self.finish_download();
                    State::Normal
                } else {
                    State::DownloadData
                }
            }
            State::DownloadPrint => {
                self.print_download(b);
                State::Normal
            }
        }
    }

    fn normal(&mut self, b: u8) -> State {
        match b {
            LF => {
                self.document.new_line();
                State::Normal
            }
            CR => State::Normal,
            ESC => State::Escape,
            GS => State::GroupSep,
            0x00..=0x1F | 0xFF => State::Normal,
            _ => {
                let ch = codepage::translate(b, self.document.formatting().code_page);
                self.document.push_char(ch);
                State::Normal
            }
        }
    }

    fn escape(&mut self, b: u8) -> State {
        match b {
            b'@' => {
                self.document.reset();
                State::Normal
            }
            b'!' => State::EscBang,
            b'E' => State::EscEmphasis,
            b'-' => State::EscUnderline,
            b'd' => State::EscFeedLines,
            b't' => State::EscCodePage,
            b'c' => State::EscPanel,
            b'3' => State::EscLineSpacing,
            b'2' => {
                self.document
                    .update_formatting(|f| f.line_spacing = Some(DEFAULT_LINE_SPACING));
                State::Normal
            }
            _ => {
                debug!(byte = b, "unknown ESC command dropped");
                State::Normal
            }
        }
    }

    fn group_sep(&mut self, b: u8) -> State {
        match b {
            b'V' => State::Cut,
            b'v' => State::Raster,
            b'*' => State::DownloadWidth,
            b'/' => State::DownloadPrint,
            _ => {
                debug!(byte = b, "unknown GS command dropped");
                State::Normal
            }
        }
    }

    fn finish_raster(&mut self) {
        let data = std::mem::take(&mut self.raster.data);
        debug!(
            width_bytes = self.raster.width_bytes,
            height = self.raster.height_dots,
            mode = self.raster.mode,
            "raster image complete"
        );
        self.document.append(Element::Bitmap(Bitmap {
            data,
            width_dots: self.raster.width_bytes as u32 * 8,
            height_dots: self.raster.height_dots as u32,
            format: BitmapFormat::Raster,
        }));
    }

    fn finish_download(&mut self) {
        debug!(
            x = self.download.width_bytes,
            y = self.download.height_bytes,
            "download image stored"
        );
        self.downloaded = Some(DownloadedBitmap {
            data: std::mem::take(&mut self.download.data),
            width_bytes: self.download.width_bytes,
            height_bytes: self.download.height_bytes,
        });
    }

    fn print_download(&mut self, m: u8) {
        // TODO: honour DownloadScale by scaling the emitted bitmap
        if DownloadScale::from_byte(m).is_none() {
            debug!(m, "unknown GS / scale, printing 1:1");
        }
        self.document.flush();
        if let Some(image) = &self.downloaded {
            self.document.append(Element::Bitmap(Bitmap {
                data: image.data.clone(),
                width_dots: image.width_bytes as u32 * 8,
                height_dots: image.height_bytes as u32 * 8,
                format: BitmapFormat::Column,
            }));
        }
    }
}

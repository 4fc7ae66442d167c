//! # Decoder Tests
//!
//! End-to-end checks through the public [`VirtualPrinter`] API.
//!
//! ## Test Coverage
//!
//! - **Chunking**: every split point of a stream that exercises every
//!   command must decode to the same document as the whole stream.
//! - **Commands**: text styles, line spacing, cuts, raster and downloaded
//!   bit images, initialize.
//! - **Code pages**: byte translation per selected table.
//! - **Rendering**: bitmap conversion and text output of decoded streams.

use boleta::VirtualPrinter;
use boleta::document::{Bitmap, BitmapFormat, Element, TextStyle};
use boleta::protocol::commands::{self, CutMode, PrintMode};
use boleta::protocol::graphics::{self, DownloadScale};
use boleta::receipt;
use boleta::render::{bitmap, text};
use pretty_assertions::assert_eq;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn decode(data: &[u8]) -> Vec<Element> {
    let printer = VirtualPrinter::new();
    printer.feed(data);
    printer.snapshot()
}

fn decode_chunks<'a>(chunks: impl IntoIterator<Item = &'a [u8]>) -> Vec<Element> {
    let printer = VirtualPrinter::new();
    for chunk in chunks {
        printer.feed(chunk);
    }
    printer.snapshot()
}

/// A stream touching every recognized command, with payload bytes that look
/// like commands.
fn kitchen_sink() -> Vec<u8> {
    let mut data = Vec::new();
    data.extend(commands::init());
    data.extend(b"plain\r\n");
    data.extend(commands::print_mode(PrintMode {
        emphasized: true,
        double_width: true,
        double_height: true,
        underline: true,
    }));
    data.extend(b"LOUD");
    data.extend(commands::print_mode(PrintMode::default()));
    data.extend(commands::emphasis(true));
    data.extend(b"red");
    data.extend(commands::emphasis(false));
    data.extend(commands::underline(2));
    data.extend(b"under");
    data.extend(commands::underline(0));
    data.extend(commands::line_spacing(50));
    data.extend(commands::line_feed());
    data.extend(commands::default_line_spacing());
    data.extend(commands::feed_lines(2));
    data.extend(commands::code_page(3));
    data.extend(b"\x86\x87");
    data.extend(commands::code_page(0));
    data.extend(commands::panel_buttons(false));
    data.extend(commands::paper_sensor(0));
    data.extend(graphics::raster(2, 3, &[0x0A, 0x1B, 0x1D, 0x40, 0xFF, 0x00]));
    data.extend(graphics::define_download(1, 1, &[0x1B, 0x40, 0x0A, 0, 0, 0, 0, 0xFF]));
    data.extend(b"after define");
    data.extend(graphics::print_download(DownloadScale::Normal));
    data.extend(commands::cut(CutMode::Full));
    data.extend(commands::cut_feed(CutMode::Partial, 0x1B));
    data.extend(b"\x1B\x7Fdropped-esc\x1D\x7Fdropped-gs\x07\xFFtail");
    data
}

// ============================================================================
// CHUNKING
// ============================================================================

#[test]
fn test_every_split_point_matches_whole() {
    let data = kitchen_sink();
    let whole = decode(&data);

    for split in 0..=data.len() {
        let (a, b) = data.split_at(split);
        assert_eq!(decode_chunks([a, b]), whole, "split at {}", split);
    }
}

#[test]
fn test_byte_at_a_time_matches_whole() {
    let data = kitchen_sink();
    assert_eq!(decode_chunks(data.chunks(1)), decode(&data));
}

#[test]
fn test_odd_chunk_sizes_match_whole() {
    let data = kitchen_sink();
    let whole = decode(&data);
    for size in [2, 3, 7, 13, 64] {
        assert_eq!(decode_chunks(data.chunks(size)), whole, "chunk size {}", size);
    }
}

#[test]
fn test_kitchen_sink_document() {
    let loud = TextStyle {
        red: true,
        double_width: true,
        double_height: true,
        underline: true,
    };
    let red = TextStyle {
        red: true,
        ..Default::default()
    };
    let under = TextStyle {
        underline: true,
        ..Default::default()
    };

    let expected = vec![
        Element::text("plain"),
        Element::NewLine { spacing: None },
        Element::Text {
            content: "LOUD".into(),
            style: loud,
        },
        Element::Text {
            content: "red".into(),
            style: red,
        },
        Element::Text {
            content: "under".into(),
            style: under,
        },
        Element::NewLine { spacing: Some(50) },
        Element::NewLine { spacing: Some(30) },
        Element::NewLine { spacing: Some(30) },
        Element::text("Áç"),
        Element::Bitmap(Bitmap {
            data: vec![0x0A, 0x1B, 0x1D, 0x40, 0xFF, 0x00],
            width_dots: 16,
            height_dots: 3,
            format: BitmapFormat::Raster,
        }),
        Element::text("after define"),
        Element::Bitmap(Bitmap {
            data: vec![0x1B, 0x40, 0x0A, 0, 0, 0, 0, 0xFF],
            width_dots: 8,
            height_dots: 8,
            format: BitmapFormat::Column,
        }),
        Element::Cut,
        Element::Cut,
        Element::text("dropped-escdropped-gstail"),
    ];

    assert_eq!(decode(&kitchen_sink()), expected);
}

// ============================================================================
// COMMANDS
// ============================================================================

#[test]
fn test_pending_text_visible() {
    let printer = VirtualPrinter::new();
    printer.feed(b"A\nB");
    assert_eq!(
        printer.snapshot(),
        vec![
            Element::text("A"),
            Element::NewLine { spacing: None },
            Element::text("B"),
        ]
    );
}

#[test]
fn test_double_size_text() {
    assert_eq!(
        decode(b"\x1B!\x30X\n"),
        vec![
            Element::Text {
                content: "X".into(),
                style: TextStyle {
                    double_width: true,
                    double_height: true,
                    ..Default::default()
                },
            },
            Element::NewLine { spacing: None },
        ]
    );
}

#[test]
fn test_raster_parks_until_complete() {
    // 2 bytes wide, 2 rows: 4 payload bytes
    let header = [0x1D, b'v', b'0', 0, 2, 0, 2, 0];
    let printer = VirtualPrinter::new();
    printer.feed(&header);
    printer.feed(&[1, 2, 3]);
    assert!(printer.snapshot().is_empty());

    printer.feed(&[4]);
    assert_eq!(
        printer.snapshot(),
        vec![Element::Bitmap(Bitmap {
            data: vec![1, 2, 3, 4],
            width_dots: 16,
            height_dots: 2,
            format: BitmapFormat::Raster,
        })]
    );
}

#[test]
fn test_truncated_raster_emits_nothing() {
    let mut data = graphics::raster(4, 4, &[0xAA; 16]);
    data.pop();
    assert!(decode(&data).is_empty());
}

#[test]
fn test_initialize_keeps_downloaded_image() {
    let mut data = graphics::define_download(1, 1, &[0x80, 0, 0, 0, 0, 0, 0, 0]);
    data.extend(b"\x1B!\x38gone\n");
    data.extend(commands::init());
    data.extend(graphics::print_download(DownloadScale::Normal));
    data.extend(b"x");

    let doc = decode(&data);
    assert_eq!(doc.len(), 2);
    assert_eq!(doc[0].as_bitmap().map(|b| b.format), Some(BitmapFormat::Column));
    assert_eq!(doc[1], Element::text("x"));
}

#[test]
fn test_code_page_translation() {
    assert_eq!(decode(b"\x80\x86"), vec![Element::text("Çå")]);
    assert_eq!(decode(b"\x1Bt\x03\x80\x86"), vec![Element::text("ÇÁ")]);
    // Unknown tables fall back to PC437
    assert_eq!(decode(b"\x1Bt\x63\x86"), vec![Element::text("å")]);
}

#[test]
fn test_repaint_counts_feeds() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let printer = VirtualPrinter::new();
    let count = Arc::new(AtomicUsize::new(0));
    let c = count.clone();
    printer.set_repaint_handler(move || {
        c.fetch_add(1, Ordering::SeqCst);
    });

    let data = kitchen_sink();
    for chunk in data.chunks(10) {
        printer.feed(chunk);
    }
    printer.feed(&[]);
    assert_eq!(count.load(Ordering::SeqCst), data.len().div_ceil(10));
}

// ============================================================================
// RENDERING
// ============================================================================

#[test]
fn test_column_to_raster_top_left_pixel() {
    let mut column = vec![0u8; 8];
    column[0] = 0x80;
    let raster = bitmap::column_to_raster(&column, 1, 1);
    assert_eq!(raster, vec![0x80, 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn test_downloaded_image_row_major() {
    // Diagonal: column c has only dot c set
    let diagonal: Vec<u8> = (0..8).map(|c| 0x80 >> c).collect();
    let mut data = graphics::define_download(1, 1, &diagonal);
    data.extend(graphics::print_download(DownloadScale::Normal));

    let doc = decode(&data);
    let bmp = doc[0].as_bitmap().cloned().unwrap();
    for y in 0..8 {
        for x in 0..8 {
            assert_eq!(bmp.is_set(x, y), x == y, "({}, {})", x, y);
        }
    }
}

#[test]
fn test_demo_receipt_renders() {
    let printer = VirtualPrinter::new();
    printer.feed(&receipt::demo_receipt());
    let out = text::render(&printer.snapshot(), printer.max_columns());

    assert!(out.contains("BOLETA MART"));
    assert!(out.contains("[bitmap 32x16 raster]"));
    assert!(out.contains("[bitmap 8x8 column]"));
    assert!(out.trim_end().ends_with("[CUT]"));
}

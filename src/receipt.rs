//! # Receipt Builders
//!
//! A built-in demo receipt exercising every command the virtual printer
//! decodes. `boleta send` uses it when no capture file is given.

use crate::protocol::commands::{self, CutMode, PrintMode};
use crate::protocol::graphics::{self, DownloadScale};

/// Current local date and time, formatted for receipt footers.
pub fn current_datetime() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Generate the demo receipt.
///
/// Features demonstrated:
/// - Print modes (double width/height, emphasis, underline)
/// - Line spacing and multi-line feed
/// - Code page selection (PC860)
/// - Raster bit image (`GS v 0`)
/// - Downloaded bit image (`GS *` + `GS /`)
/// - Partial cut with feed
pub fn demo_receipt() -> Vec<u8> {
    let mut data = Vec::new();
    data.extend(commands::init());

    // Header
    data.extend(commands::print_mode(PrintMode {
        double_width: true,
        double_height: true,
        ..Default::default()
    }));
    data.extend(b"BOLETA MART\n");
    data.extend(commands::print_mode(PrintMode::default()));
    data.extend(commands::underline(1));
    data.extend(b"virtual esc/pos demo\n");
    data.extend(commands::underline(0));
    data.extend(current_datetime().as_bytes());
    data.extend(commands::line_feed());
    data.extend(commands::feed_lines(1));

    // Items
    data.extend(commands::line_spacing(24));
    data.extend(b"Cafe espresso            4.50\n");
    data.extend(b"Pao de queijo            3.25\n");
    data.extend(b"Thermal paper (mystery)  7.25\n");
    data.extend(commands::default_line_spacing());
    data.extend(b"------------------------------\n");
    data.extend(commands::emphasis(true));
    data.extend(b"TOTAL                   15.00\n");
    data.extend(commands::emphasis(false));

    // Portuguese code page: 0x87 = c-cedilla, 0x84 = a-tilde
    data.extend(commands::code_page(3));
    data.extend(b"Obrigado pela prefer\x88ncia! Volte sempre, cora\x87\x84o.\n");
    data.extend(commands::code_page(0));

    // Raster logo: a 32x16 checkerboard
    let checker: Vec<u8> = (0..16)
        .flat_map(|row| {
            let b = if (row / 4) % 2 == 0 { 0xF0 } else { 0x0F };
            [b; 4]
        })
        .collect();
    data.extend(graphics::raster(4, 16, &checker));

    // Downloaded logo: an 8x8 diagonal, stored then printed
    let diagonal: Vec<u8> = (0..8).map(|col| 0x80 >> col).collect();
    data.extend(graphics::define_download(1, 1, &diagonal));
    data.extend(graphics::print_download(DownloadScale::Normal));

    data.extend(commands::feed_lines(3));
    data.extend(commands::cut_feed(CutMode::Partial, 10));
    data
}

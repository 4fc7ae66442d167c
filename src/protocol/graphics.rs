//! # ESC/POS Bit Image Commands
//!
//! Encoders for the two bit image forms the virtual printer decodes.
//!
//! | Form | Command | Layout | Lifetime |
//! |------|---------|--------|----------|
//! | Raster | GS v 0 | Row-major | Printed immediately |
//! | Downloaded | GS * / GS / | Column-major | Stored until redefined |
//!
//! ## Raster Bit Packing
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░   (bit 7 = leftmost dot)
//! ```
//!
//! ## Downloaded Bit Packing
//!
//! Each byte covers 8 *vertical* dots of one column, bit 7 = topmost dot.
//! Columns are sent left to right, each column top to bottom:
//!
//! ```text
//!            col 0   col 1   ...  col x*8-1
//! rows 0-7   d[0]    d[y]         ...
//! rows 8-15  d[1]    d[y+1]
//! ...
//! ```
//!
//! Use [`crate::render::bitmap::column_to_raster`] to convert to row-major.

use super::commands::{GS, u16_le};

// ============================================================================
// RASTER BIT IMAGE (GS v 0)
// ============================================================================

/// # Print Raster Bit Image (GS v 0 m xL xH yL yH d1...dk)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS v 0 m xL xH yL yH d1...dk |
/// | Hex     | 1D 76 30 m xL xH yL yH d1...dk |
///
/// ## Parameters
///
/// - `m`: Scale mode (0 = normal); always 0 here
/// - `xL, xH`: Width in bytes, little-endian
/// - `yL, yH`: Height in dots, little-endian
/// - `d1...dk`: k = width_bytes × height bytes, row-major
///
/// ## Example
///
/// ```
/// use boleta::protocol::graphics;
///
/// let cmd = graphics::raster(2, 3, &[0xFF; 6]);
/// assert_eq!(&cmd[..8], &[0x1D, 0x76, 0x30, 0, 2, 0, 3, 0]);
/// assert_eq!(cmd.len(), 8 + 6);
/// ```
pub fn raster(width_bytes: u16, height: u16, data: &[u8]) -> Vec<u8> {
    let expected_len = width_bytes as usize * height as usize;

    debug_assert!(
        data.len() == expected_len,
        "Raster data length mismatch. Expected {} ({} bytes × {} rows), got {}",
        expected_len,
        width_bytes,
        height,
        data.len()
    );

    let [xl, xh] = u16_le(width_bytes);
    let [yl, yh] = u16_le(height);

    let mut cmd = Vec::with_capacity(8 + data.len());
    cmd.push(GS);
    cmd.push(b'v');
    cmd.push(b'0');
    cmd.push(0); // m = normal
    cmd.push(xl);
    cmd.push(xh);
    cmd.push(yl);
    cmd.push(yh);
    cmd.extend_from_slice(data);
    cmd
}

// ============================================================================
// DOWNLOADED BIT IMAGE (GS * / GS /)
// ============================================================================

/// # Define Downloaded Bit Image (GS * x y d1...dk)
///
/// Stores an image of `x*8` × `y*8` dots in the printer. It is printed later
/// with [`print_download`] and survives `ESC @`.
///
/// ## Parameters
///
/// - `x`: Width in bytes (`x*8` columns)
/// - `y`: Height in bytes (`y*8` rows)
/// - `d1...dk`: k = x × y × 8 bytes, column-major
///
/// ## Example
///
/// ```
/// use boleta::protocol::graphics;
///
/// let cmd = graphics::define_download(1, 1, &[0x80; 8]);
/// assert_eq!(&cmd[..4], &[0x1D, 0x2A, 1, 1]);
/// assert_eq!(cmd.len(), 4 + 8);
/// ```
pub fn define_download(x: u8, y: u8, data: &[u8]) -> Vec<u8> {
    let expected_len = x as usize * y as usize * 8;

    debug_assert!(
        data.len() == expected_len,
        "Download data length mismatch. Expected {} ({} × {} × 8), got {}",
        expected_len,
        x,
        y,
        data.len()
    );

    let mut cmd = Vec::with_capacity(4 + data.len());
    cmd.push(GS);
    cmd.push(b'*');
    cmd.push(x);
    cmd.push(y);
    cmd.extend_from_slice(data);
    cmd
}

/// Scale for `GS / m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownloadScale {
    #[default]
    Normal,
    DoubleWidth,
    DoubleHeight,
    Quadruple,
}

impl DownloadScale {
    /// The `m` parameter of `GS / m`.
    pub fn to_byte(self) -> u8 {
        match self {
            DownloadScale::Normal => 0,
            DownloadScale::DoubleWidth => 1,
            DownloadScale::DoubleHeight => 2,
            DownloadScale::Quadruple => 3,
        }
    }

    /// Parse `m`; both the binary (0-3) and ASCII ('0'-'3') forms are valid.
    pub fn from_byte(m: u8) -> Option<Self> {
        match m {
            0 | 48 => Some(DownloadScale::Normal),
            1 | 49 => Some(DownloadScale::DoubleWidth),
            2 | 50 => Some(DownloadScale::DoubleHeight),
            3 | 51 => Some(DownloadScale::Quadruple),
            _ => None,
        }
    }
}

/// # Print Downloaded Bit Image (GS / m)
///
/// ```
/// use boleta::protocol::graphics::{self, DownloadScale};
///
/// assert_eq!(graphics::print_download(DownloadScale::Normal), vec![0x1D, 0x2F, 0]);
/// ```
#[inline]
pub fn print_download(scale: DownloadScale) -> Vec<u8> {
    vec![GS, b'/', scale.to_byte()]
}

// ============================================================================
// TESTS
// ============================================================================

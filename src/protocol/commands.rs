//! # ESC/POS Protocol Commands
//!
//! This module implements encoders for the ESC/POS commands the virtual
//! printer understands. The decoder in [`crate::decoder`] is the inverse of
//! these builders; the test-suite and the demo receipt use them to produce
//! well-formed streams.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`, `CR`
//! - Two bytes: `ESC @`, `ESC 2`
//! - With parameters: `ESC ! n`, `ESC d n`, `GS V m`, `GS v 0 m xL xH yL yH d...`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Hex: 0x1B, Decimal: 27
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for cutter control and bit images.
/// Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
///
/// Prints the line buffer and advances paper by the current line spacing.
pub const LF: u8 = 0x0A;

/// CR (Carriage Return) - Ignored by the virtual printer
pub const CR: u8 = 0x0D;

/// Line pitch selected by `ESC 2`, in dots (about 1/6 inch).
pub const DEFAULT_LINE_SPACING: u8 = 30;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Clears the print buffer and resets the print mode to the power-on
/// defaults.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Does NOT Reset
///
/// - The downloaded bit image (`GS *`)
/// - The selected character code table (`ESC t`)
///
/// ## Example
///
/// ```
/// use boleta::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// Print and feed one line (LF)
#[inline]
pub fn line_feed() -> Vec<u8> {
    vec![LF]
}

// ============================================================================
// PRINT MODE COMMANDS
// ============================================================================

/// Character attributes packed by `ESC ! n`.
///
/// | Bit | Attribute |
/// |-----|-----------|
/// | 3 | Emphasized (rendered red by the virtual printer) |
/// | 4 | Double height |
/// | 5 | Double width |
/// | 7 | Underline |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrintMode {
    pub emphasized: bool,
    pub double_height: bool,
    pub double_width: bool,
    pub underline: bool,
}

impl PrintMode {
    /// Pack the attributes into the `n` parameter of `ESC ! n`.
    pub fn to_byte(self) -> u8 {
        let mut n = 0;
        if self.emphasized {
            n |= 0x08;
        }
        if self.double_height {
            n |= 0x10;
        }
        if self.double_width {
            n |= 0x20;
        }
        if self.underline {
            n |= 0x80;
        }
        n
    }
}

/// # Select Print Mode (ESC ! n)
///
/// Sets all character attributes at once.
///
/// ## Example
///
/// ```
/// use boleta::protocol::commands::{self, PrintMode};
///
/// let big = PrintMode { double_width: true, double_height: true, ..Default::default() };
/// assert_eq!(commands::print_mode(big), vec![0x1B, 0x21, 0x30]);
/// ```
#[inline]
pub fn print_mode(mode: PrintMode) -> Vec<u8> {
    vec![ESC, b'!', mode.to_byte()]
}

/// # Emphasized Mode (ESC E n)
///
/// Only the least significant bit of `n` is used. The virtual printer shows
/// emphasized text in red.
#[inline]
pub fn emphasis(on: bool) -> Vec<u8> {
    vec![ESC, b'E', on as u8]
}

/// # Underline Mode (ESC - n)
///
/// | n | Meaning |
/// |---|---------|
/// | 0, 48 | Off |
/// | 1, 49 | 1-dot underline |
/// | 2, 50 | 2-dot underline |
#[inline]
pub fn underline(thickness: u8) -> Vec<u8> {
    vec![ESC, b'-', thickness]
}

// ============================================================================
// LINE SPACING AND FEED COMMANDS
// ============================================================================

/// # Print and Feed n Lines (ESC d n)
///
/// ## Example
///
/// ```
/// use boleta::protocol::commands;
///
/// assert_eq!(commands::feed_lines(3), vec![0x1B, 0x64, 3]);
/// ```
#[inline]
pub fn feed_lines(n: u8) -> Vec<u8> {
    vec![ESC, b'd', n]
}

/// # Set Line Spacing (ESC 3 n)
///
/// Sets the line pitch to `n` dots.
#[inline]
pub fn line_spacing(n: u8) -> Vec<u8> {
    vec![ESC, b'3', n]
}

/// # Select Default Line Spacing (ESC 2)
///
/// Selects a pitch of [`DEFAULT_LINE_SPACING`] dots.
#[inline]
pub fn default_line_spacing() -> Vec<u8> {
    vec![ESC, b'2']
}

/// # Select Character Code Table (ESC t n)
///
/// See [`crate::protocol::codepage`] for the supported tables.
#[inline]
pub fn code_page(n: u8) -> Vec<u8> {
    vec![ESC, b't', n]
}

// ============================================================================
// PANEL / SENSOR COMMANDS
// ============================================================================

/// # Enable/Disable Panel Buttons (ESC c 5 n)
///
/// Accepted and ignored by the virtual printer.
#[inline]
pub fn panel_buttons(enabled: bool) -> Vec<u8> {
    vec![ESC, b'c', b'5', (!enabled) as u8]
}

/// # Select Paper Sensor to Stop Printing (ESC c 4 n)
///
/// Accepted and ignored by the virtual printer.
#[inline]
pub fn paper_sensor(n: u8) -> Vec<u8> {
    vec![ESC, b'c', b'4', n]
}

// ============================================================================
// CUTTER CONTROL COMMANDS
// ============================================================================

/// Cut type for `GS V`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutMode {
    Full,
    Partial,
}

/// # Cut Paper (GS V m)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS V m |
/// | Hex     | 1D 56 m |
///
/// `m` = 0 (full) or 1 (partial).
///
/// ## Example
///
/// ```
/// use boleta::protocol::commands::{self, CutMode};
///
/// assert_eq!(commands::cut(CutMode::Partial), vec![0x1D, 0x56, 1]);
/// ```
#[inline]
pub fn cut(mode: CutMode) -> Vec<u8> {
    let m = match mode {
        CutMode::Full => 0,
        CutMode::Partial => 1,
    };
    vec![GS, b'V', m]
}

/// # Feed and Cut Paper (GS V m n)
///
/// Feeds `n` dots then cuts. `m` = 65 (full) or 66 (partial).
#[inline]
pub fn cut_feed(mode: CutMode, n: u8) -> Vec<u8> {
    let m = match mode {
        CutMode::Full => 65,
        CutMode::Partial => 66,
    };
    vec![GS, b'V', m, n]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ## Example
///
/// ```
/// use boleta::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(576), [0x40, 0x02]); // 576 = 0x0240
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================

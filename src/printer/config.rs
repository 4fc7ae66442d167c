//! # Printer Configuration
//!
//! Paper profiles for the virtual printer.
//!
//! ## Supported Profiles
//!
//! | Profile | Width (dots) | Resolution | Columns (Font A) |
//! |---------|--------------|------------|------------------|
//! | 80mm | 576 | 203 DPI | 48 |
//! | 58mm | 384 | 203 DPI | 32 |
//!
//! ## Usage
//!
//! ```
//! use boleta::printer::PrinterConfig;
//!
//! let config = PrinterConfig::by_name("58mm").unwrap();
//! assert_eq!(config.columns, 32);
//! assert_eq!(config.width_bytes(), 48);
//! ```

use serde::Serialize;

use crate::error::BoletaError;

/// # Printer Configuration
///
/// The physical characteristics the emulated printer reports.
///
/// ## Calculations
///
/// ```text
/// dots_per_mm = dpi / 25.4
/// width_mm = width_dots / dots_per_mm
///
/// For 80mm paper:
///   dots_per_mm = 203 / 25.4 ≈ 8
///   width_mm = 576 / 8 = 72mm printable
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrinterConfig {
    /// Profile name
    pub name: &'static str,

    /// Maximum print width in dots (pixels)
    pub width_dots: u16,

    /// Resolution in dots per inch
    pub dpi: u16,

    /// Characters per line in the default font; the default column limit
    pub columns: u16,
}

impl PrinterConfig {
    /// # 80mm Receipt Printer
    ///
    /// ```text
    /// ├── 4mm ──┼────── 72mm printable ──────┼── 4mm ──┤
    /// │ margin  │         576 dots           │ margin  │
    /// ```
    pub const EPSON_80MM: Self = Self {
        name: "80mm",
        width_dots: 576,
        dpi: 203,
        columns: 48,
    };

    /// # 58mm Receipt Printer
    ///
    /// 48mm printable, 384 dots.
    pub const EPSON_58MM: Self = Self {
        name: "58mm",
        width_dots: 384,
        dpi: 203,
        columns: 32,
    };

    /// Look up a built-in profile by name (`"80mm"` or `"58mm"`).
    pub fn by_name(name: &str) -> Result<Self, BoletaError> {
        Self::built_in()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| {
                BoletaError::InvalidArgument(format!(
                    "Unknown paper '{}'. Use '80mm' or '58mm'",
                    name
                ))
            })
    }

    /// All built-in profiles.
    pub fn built_in() -> [Self; 2] {
        [Self::EPSON_80MM, Self::EPSON_58MM]
    }

    /// Print width in bytes (width_dots / 8)
    #[inline]
    pub fn width_bytes(&self) -> u16 {
        self.width_dots / 8
    }

    /// Calculate dots per millimeter
    #[inline]
    pub fn dots_per_mm(&self) -> f32 {
        self.dpi as f32 / 25.4
    }

    /// Calculate print width in millimeters
    #[inline]
    pub fn width_mm(&self) -> f32 {
        self.width_dots as f32 / self.dots_per_mm()
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::EPSON_80MM
    }
}

//! Element types produced by the decoder.

use serde::Serialize;

use crate::render::bitmap;

/// Character attributes that apply to a whole text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStyle {
    /// Emphasized (`ESC E` / `ESC !` bit 3); the virtual printer prints it red
    pub red: bool,
    pub double_width: bool,
    pub double_height: bool,
    pub underline: bool,
}

/// Mutable formatting state of the printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Formatting {
    pub style: TextStyle,
    /// Fixed line pitch in dots; `None` = automatic
    pub line_spacing: Option<u8>,
    /// `ESC t n` selector
    pub code_page: u8,
}

/// Memory layout of a bitmap payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BitmapFormat {
    /// Row-major, 8 horizontal dots per byte (`GS v 0`)
    Raster,
    /// Column-major, 8 vertical dots per byte (`GS *`)
    Column,
}

/// A bit image as received, before any conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bitmap {
    pub data: Vec<u8>,
    pub width_dots: u32,
    pub height_dots: u32,
    pub format: BitmapFormat,
}

impl Bitmap {
    /// Bytes per row once converted to raster layout.
    pub fn width_bytes(&self) -> usize {
        (self.width_dots as usize).div_ceil(8)
    }

    /// Row-major copy of the image, converting column-major payloads.
    pub fn to_row_major(&self) -> Vec<u8> {
        match self.format {
            BitmapFormat::Raster => self.data.clone(),
            BitmapFormat::Column => bitmap::column_to_raster(
                &self.data,
                self.width_bytes(),
                (self.height_dots as usize).div_ceil(8),
            ),
        }
    }

    /// Whether the dot at (`x`, `y`) is black. Out-of-range dots are white.
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        if x >= self.width_dots || y >= self.height_dots {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        match self.format {
            BitmapFormat::Raster => self
                .data
                .get(y * self.width_bytes() + x / 8)
                .is_some_and(|b| b & (0x80 >> (x % 8)) != 0),
            BitmapFormat::Column => {
                let height_bytes = (self.height_dots as usize).div_ceil(8);
                self.data
                    .get(x * height_bytes + y / 8)
                    .is_some_and(|b| b & (0x80 >> (y % 8)) != 0)
            }
        }
    }
}

/// One item of the printed document, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A run of text sharing one style. `content` is never empty.
    Text { content: String, style: TextStyle },
    /// End of line; `spacing` is the fixed pitch in dots, if one was set.
    NewLine { spacing: Option<u8> },
    /// Paper cut mark
    Cut,
    /// Bit image
    Bitmap(Bitmap),
}

impl Element {
    /// Shorthand for an unstyled text element.
    pub fn text(content: impl Into<String>) -> Self {
        Element::Text {
            content: content.into(),
            style: TextStyle::default(),
        }
    }

    pub fn as_bitmap(&self) -> Option<&Bitmap> {
        match self {
            Element::Bitmap(bitmap) => Some(bitmap),
            _ => None,
        }
    }
}

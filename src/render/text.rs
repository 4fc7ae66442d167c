//! # Plain-Text Rendering
//!
//! Renders a document snapshot as monospaced text, the way it would come out
//! of a printer with `columns` characters per line.
//!
//! ```text
//! TOTAL        12.50
//! [bitmap 64x24 raster]
//! ------------------------[CUT]
//! ```
//!
//! Styles are not shown, except that double-width characters occupy two
//! columns when wrapping.

use crate::document::{BitmapFormat, Element};

const CUT_LABEL: &str = "[CUT]";

/// Rule width used for cut marks when wrapping is disabled.
const DEFAULT_RULE_WIDTH: usize = 32;

/// Render `elements` as text, wrapping at `columns` (0 = no wrapping).
///
/// ## Example
///
/// ```
/// use boleta::document::Element;
/// use boleta::render::text::render;
///
/// let doc = vec![
///     Element::text("ABCDEF"),
///     Element::NewLine { spacing: None },
/// ];
/// assert_eq!(render(&doc, 4), "ABCD\nEF\n");
/// ```
pub fn render(elements: &[Element], columns: usize) -> String {
    let mut out = String::new();
    let mut col = 0usize;

    for element in elements {
        match element {
            Element::Text { content, style } => {
                let w = if style.double_width { 2 } else { 1 };
                for ch in content.chars() {
                    if columns > 0 && col > 0 && col + w > columns {
                        out.push('\n');
                        col = 0;
                    }
                    out.push(ch);
                    col += w;
                }
            }
            Element::NewLine { .. } => {
                out.push('\n');
                col = 0;
            }
            Element::Cut => {
                end_line(&mut out, &mut col);
                let width = if columns > 0 { columns } else { DEFAULT_RULE_WIDTH };
                let dashes = width.saturating_sub(CUT_LABEL.len());
                out.push_str(&"-".repeat(dashes));
                out.push_str(CUT_LABEL);
                out.push('\n');
            }
            Element::Bitmap(bitmap) => {
                end_line(&mut out, &mut col);
                let format = match bitmap.format {
                    BitmapFormat::Raster => "raster",
                    BitmapFormat::Column => "column",
                };
                out.push_str(&format!(
                    "[bitmap {}x{} {}]\n",
                    bitmap.width_dots, bitmap.height_dots, format
                ));
            }
        }
    }

    out
}

fn end_line(out: &mut String, col: &mut usize) {
    if *col > 0 {
        out.push('\n');
        *col = 0;
    }
}

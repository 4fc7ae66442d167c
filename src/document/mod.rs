//! # Document Model
//!
//! The ordered sequence of printed elements plus the formatting state they
//! were printed under.
//!
//! Text is not committed character by character. It accumulates in a
//! *pending run* that is flushed into a [`Element::Text`] whenever another
//! element is about to be appended or the formatting changes, so every
//! committed run has a single style. [`Document::snapshot`] shows the
//! pending run as if it had already been flushed.
//!
//! ## Example
//!
//! ```
//! use boleta::document::{Document, Element};
//!
//! let mut doc = Document::new();
//! doc.push_char('A');
//! doc.new_line();
//! doc.push_char('B');
//!
//! assert_eq!(
//!     doc.snapshot(),
//!     vec![
//!         Element::text("A"),
//!         Element::NewLine { spacing: None },
//!         Element::text("B"),
//!     ]
//! );
//! // "B" is still pending
//! assert_eq!(doc.len(), 2);
//! ```

mod types;

pub use types::{Bitmap, BitmapFormat, Element, Formatting, TextStyle};

/// Committed elements, pending text run and formatting state.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
    pending: String,
    formatting: Formatting,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed elements (the pending run is not included).
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of committed elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.pending.is_empty()
    }

    /// Text received since the last flush.
    pub fn pending_text(&self) -> &str {
        &self.pending
    }

    pub fn formatting(&self) -> &Formatting {
        &self.formatting
    }

    /// Change the formatting state. The pending run is flushed first so it
    /// keeps the style it was received under.
    pub fn update_formatting(&mut self, f: impl FnOnce(&mut Formatting)) {
        self.flush();
        f(&mut self.formatting);
    }

    /// Add one character to the pending run.
    pub fn push_char(&mut self, ch: char) {
        self.pending.push(ch);
    }

    /// Commit the pending run, if any.
    pub fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let content = std::mem::take(&mut self.pending);
        self.elements.push(Element::Text {
            content,
            style: self.formatting.style,
        });
    }

    /// Commit the pending run, then append `element`.
    pub fn append(&mut self, element: Element) {
        self.flush();
        self.elements.push(element);
    }

    /// Append a line break at the current line spacing.
    pub fn new_line(&mut self) {
        self.append(Element::NewLine {
            spacing: self.formatting.line_spacing,
        });
    }

    /// Copy of the document, with the pending run rendered as if flushed.
    pub fn snapshot(&self) -> Vec<Element> {
        let mut out = Vec::with_capacity(self.elements.len() + 1);
        out.extend_from_slice(&self.elements);
        if !self.pending.is_empty() {
            out.push(Element::Text {
                content: self.pending.clone(),
                style: self.formatting.style,
            });
        }
        out
    }

    /// Printer initialize: drop the pending run without committing it,
    /// clear all elements and reset style and line spacing. The code page
    /// selection is kept.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.elements.clear();
        self.formatting = Formatting {
            code_page: self.formatting.code_page,
            ..Formatting::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn red() -> TextStyle {
        TextStyle {
            red: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_pending_visible_in_snapshot() {
        let mut doc = Document::new();
        doc.push_char('h');
        doc.push_char('i');
        assert_eq!(doc.len(), 0);
        assert_eq!(doc.pending_text(), "hi");
        assert_eq!(doc.snapshot(), vec![Element::text("hi")]);
    }

    #[test]
    fn test_style_change_flushes() {
        let mut doc = Document::new();
        doc.push_char('a');
        doc.update_formatting(|f| f.style.red = true);
        doc.push_char('b');
        doc.flush();

        assert_eq!(
            doc.elements(),
            &[
                Element::text("a"),
                Element::Text {
                    content: "b".into(),
                    style: red(),
                },
            ]
        );
    }

    #[test]
    fn test_flush_without_text_commits_nothing() {
        let mut doc = Document::new();
        doc.flush();
        doc.update_formatting(|f| f.style.underline = true);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_new_line_uses_spacing() {
        let mut doc = Document::new();
        doc.new_line();
        doc.update_formatting(|f| f.line_spacing = Some(40));
        doc.new_line();
        assert_eq!(
            doc.elements(),
            &[
                Element::NewLine { spacing: None },
                Element::NewLine { spacing: Some(40) },
            ]
        );
    }

    #[test]
    fn test_append_flushes_first() {
        let mut doc = Document::new();
        doc.push_char('x');
        doc.append(Element::Cut);
        assert_eq!(doc.elements(), &[Element::text("x"), Element::Cut]);
        assert_eq!(doc.pending_text(), "");
    }

    #[test]
    fn test_reset_discards_pending_keeps_code_page() {
        let mut doc = Document::new();
        doc.update_formatting(|f| {
            f.code_page = 3;
            f.line_spacing = Some(10);
            f.style = red();
        });
        doc.push_char('a');
        doc.new_line();
        doc.push_char('b');
        doc.reset();

        assert!(doc.is_empty());
        assert!(doc.snapshot().is_empty());
        assert_eq!(
            *doc.formatting(),
            Formatting {
                code_page: 3,
                ..Default::default()
            }
        );
    }
}

//! # Virtual Printer
//!
//! Thread-safe facade over the [`Decoder`]. Every producer (TCP connections,
//! HTTP uploads, tests) feeds the same instance; every consumer takes
//! snapshots.
//!
//! ## Locking
//!
//! One mutex guards the decoder. A whole `feed` call holds it, so two
//! producers interleave at chunk granularity and an element is never torn.
//! The repaint handler runs after the lock is released, on the feeding
//! thread, so it may call [`VirtualPrinter::snapshot`] itself.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, trace};

use super::PrinterConfig;
use crate::decoder::Decoder;
use crate::document::Element;

/// Callback invoked after the document changes.
pub type RepaintHandler = Arc<dyn Fn() + Send + Sync>;

pub struct VirtualPrinter {
    decoder: Mutex<Decoder>,
    repaint: Mutex<Option<RepaintHandler>>,
    max_columns: AtomicUsize,
    config: PrinterConfig,
}

impl VirtualPrinter {
    /// An 80mm printer.
    pub fn new() -> Self {
        Self::with_config(PrinterConfig::default())
    }

    pub fn with_config(config: PrinterConfig) -> Self {
        Self {
            decoder: Mutex::new(Decoder::new()),
            repaint: Mutex::new(None),
            max_columns: AtomicUsize::new(config.columns as usize),
            config,
        }
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Decode `bytes` into the document. An empty chunk is a no-op and does
    /// not notify.
    pub fn feed(&self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        {
            let mut decoder = self.lock();
            decoder.feed(bytes);
            trace!(len = bytes.len(), state = ?decoder.state(), "fed");
        }
        self.notify();
    }

    /// Copy of the current document, including text not yet closed by a
    /// newline or style change.
    pub fn snapshot(&self) -> Vec<Element> {
        self.lock().snapshot()
    }

    /// Number of elements in [`snapshot`](Self::snapshot).
    pub fn len(&self) -> usize {
        let decoder = self.lock();
        let doc = decoder.document();
        doc.len() + usize::from(!doc.pending_text().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.lock().document().is_empty()
    }

    /// Abandon any partial command and clear the document as `ESC @` would.
    pub fn reset(&self) {
        {
            let mut decoder = self.lock();
            if decoder.state().is_receiving_data() {
                debug!(state = ?decoder.state(), "abandoning partial bit image");
            }
            decoder.reset();
        }
        debug!("printer reset");
        self.notify();
    }

    /// Install the callback run after each non-empty `feed` and each `reset`.
    pub fn set_repaint_handler(&self, handler: impl Fn() + Send + Sync + 'static) {
        *self
            .repaint
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(Arc::new(handler));
    }

    /// Characters per line hint for renderers. Stored only.
    pub fn set_max_columns(&self, columns: usize) {
        self.max_columns.store(columns, Ordering::Relaxed);
    }

    pub fn max_columns(&self) -> usize {
        self.max_columns.load(Ordering::Relaxed)
    }

    fn lock(&self) -> MutexGuard<'_, Decoder> {
        // Decoder state is valid between bytes; poisoning is recoverable.
        self.decoder
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn notify(&self) {
        let handler = self
            .repaint
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        if let Some(handler) = handler {
            handler();
        }
    }
}

impl Default for VirtualPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VirtualPrinter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirtualPrinter")
            .field("config", &self.config)
            .field("max_columns", &self.max_columns())
            .finish_non_exhaustive()
    }
}

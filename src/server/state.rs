//! Server state and configuration.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::printer::VirtualPrinter;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Raw print stream listener (e.g., "0.0.0.0:9100")
    pub listen_addr: String,
    /// HTTP API listener (e.g., "127.0.0.1:8080"); `None` disables it
    pub http_addr: Option<String>,
    /// Reset the printer whenever a new raw connection is accepted
    pub reset_on_connect: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:9100".to_string(),
            http_addr: Some("127.0.0.1:8080".to_string()),
            reset_on_connect: false,
        }
    }
}

/// Change tracking fed by the printer's repaint handler.
struct Activity {
    revision: watch::Sender<u64>,
    last: Mutex<Option<DateTime<Utc>>>,
}

impl Activity {
    fn touch(&self) {
        self.revision.send_modify(|r| *r += 1);
        *self.last.lock().unwrap_or_else(|p| p.into_inner()) = Some(Utc::now());
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub printer: Arc<VirtualPrinter>,
    activity: Arc<Activity>,
}

impl AppState {
    /// Wrap `printer` and take over its repaint handler to count revisions.
    pub fn new(printer: Arc<VirtualPrinter>) -> Arc<Self> {
        let (revision, _) = watch::channel(0);
        let activity = Arc::new(Activity {
            revision,
            last: Mutex::new(None),
        });

        let hook = activity.clone();
        printer.set_repaint_handler(move || hook.touch());

        Arc::new(Self { printer, activity })
    }

    /// Number of document changes seen so far.
    pub fn revision(&self) -> u64 {
        *self.activity.revision.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.activity.revision.subscribe()
    }

    /// Time of the most recent change.
    pub fn last_activity(&self) -> Option<DateTime<Utc>> {
        *self.activity.last.lock().unwrap_or_else(|p| p.into_inner())
    }
}

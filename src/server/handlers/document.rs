//! Document and printer control handlers.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::document::{BitmapFormat, Element, TextStyle};
use crate::printer::PrinterConfig;
use crate::render;

use super::super::state::AppState;

/// How long `/api/document/wait` blocks before answering unchanged.
const WAIT_TIMEOUT: Duration = Duration::from_secs(25);

/// One element as served to clients. Bitmap payloads are fetched
/// separately as PNG.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementView {
    Text {
        content: String,
        style: TextStyle,
    },
    NewLine {
        spacing: Option<u8>,
    },
    Cut,
    Bitmap {
        width_dots: u32,
        height_dots: u32,
        format: BitmapFormat,
        bytes: usize,
        url: String,
    },
}

impl ElementView {
    fn new(index: usize, element: Element) -> Self {
        match element {
            Element::Text { content, style } => Self::Text { content, style },
            Element::NewLine { spacing } => Self::NewLine { spacing },
            Element::Cut => Self::Cut,
            Element::Bitmap(b) => Self::Bitmap {
                width_dots: b.width_dots,
                height_dots: b.height_dots,
                format: b.format,
                bytes: b.data.len(),
                url: format!("/api/document/bitmaps/{}", index),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub revision: u64,
    pub elements: Vec<ElementView>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub profile: PrinterConfig,
    pub max_columns: usize,
    pub revision: u64,
    pub elements: usize,
    pub last_activity: Option<String>,
}

/// GET /api/status - Printer summary.
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let printer = &state.printer;
    Json(StatusResponse {
        profile: *printer.config(),
        max_columns: printer.max_columns(),
        revision: state.revision(),
        elements: printer.len(),
        last_activity: state.last_activity().map(|t| t.to_rfc3339()),
    })
}

/// GET /api/document - Current document.
pub async fn document(State(state): State<Arc<AppState>>) -> Json<DocumentResponse> {
    // Read the revision first so a client never sees a revision newer than
    // the elements it came with.
    let revision = state.revision();
    let elements = state
        .printer
        .snapshot()
        .into_iter()
        .enumerate()
        .map(|(i, e)| ElementView::new(i, e))
        .collect();
    Json(DocumentResponse { revision, elements })
}

#[derive(Debug, Deserialize)]
pub struct WaitQuery {
    #[serde(default)]
    pub since: u64,
}

#[derive(Debug, Serialize)]
pub struct WaitResponse {
    pub revision: u64,
    pub changed: bool,
}

/// GET /api/document/wait?since=N - Long-poll until the revision passes N.
pub async fn wait(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WaitQuery>,
) -> Json<WaitResponse> {
    let mut rx = state.subscribe();
    let since = query.since;

    let revision = match tokio::time::timeout(WAIT_TIMEOUT, rx.wait_for(|r| *r > since)).await {
        Ok(Ok(r)) => *r,
        _ => state.revision(),
    };

    Json(WaitResponse {
        revision,
        changed: revision > since,
    })
}

/// GET /api/document/bitmaps/:index - Bitmap element as PNG.
pub async fn bitmap(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let elements = state.printer.snapshot();
    let bitmap = elements
        .get(index)
        .and_then(Element::as_bitmap)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("No bitmap at index {}", index)))?;

    let png = render::png::bitmap_to_png(bitmap).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode PNG: {}", e),
        )
    })?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}

#[derive(Debug, Serialize)]
pub struct PrintResponse {
    pub accepted: usize,
}

/// POST /api/print - Feed the raw request body to the printer.
pub async fn print(State(state): State<Arc<AppState>>, body: Bytes) -> Json<PrintResponse> {
    debug!(len = body.len(), "print stream via HTTP");
    state.printer.feed(&body);
    Json(PrintResponse {
        accepted: body.len(),
    })
}

/// POST /api/reset - Clear the document.
pub async fn reset(State(state): State<Arc<AppState>>) -> StatusCode {
    state.printer.reset();
    info!("printer reset via HTTP");
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use crate::printer::VirtualPrinter;
    use crate::server::{router, state::AppState};
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> (Arc<AppState>, Router) {
        let state = AppState::new(Arc::new(VirtualPrinter::new()));
        (state.clone(), router(state))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let res = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get_json(app: Router, uri: &str) -> Value {
        let (status, body) = get(app, uri).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_print_then_document() {
        let (_, app) = app();
        let res = app
            .clone()
            .oneshot(
                Request::post("/api/print")
                    .body(Body::from(&b"\x1BE\x01Hi\x1BE\x00\n\x1DV\x00"[..]))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let accepted: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(accepted, json!({"accepted": 12}));

        let doc = get_json(app, "/api/document").await;
        assert_eq!(
            doc,
            json!({
                "revision": 1,
                "elements": [
                    {
                        "type": "text",
                        "content": "Hi",
                        "style": {
                            "red": true,
                            "double_width": false,
                            "double_height": false,
                            "underline": false
                        }
                    },
                    {"type": "new_line", "spacing": null},
                    {"type": "cut"}
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_bitmap_png() {
        let (state, app) = app();
        state
            .printer
            .feed(b"x\x1Dv0\x00\x01\x00\x02\x00\xFF\x00");

        let doc = get_json(app.clone(), "/api/document").await;
        assert_eq!(
            doc["elements"][1],
            json!({
                "type": "bitmap",
                "width_dots": 8,
                "height_dots": 2,
                "format": "raster",
                "bytes": 2,
                "url": "/api/document/bitmaps/1"
            })
        );

        let res = app
            .clone()
            .oneshot(
                Request::get("/api/document/bitmaps/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[header::CONTENT_TYPE], "image/png");
        let png = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&png[..4], b"\x89PNG");

        let (status, _) = get(app.clone(), "/api/document/bitmaps/0").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = get(app, "/api/document/bitmaps/9").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_status() {
        let (state, app) = app();
        let status = get_json(app.clone(), "/api/status").await;
        assert_eq!(status["profile"]["name"], "80mm");
        assert_eq!(status["max_columns"], 48);
        assert_eq!(status["revision"], 0);
        assert_eq!(status["last_activity"], Value::Null);

        state.printer.feed(b"a");
        let status = get_json(app, "/api/status").await;
        assert_eq!(status["revision"], 1);
        assert_eq!(status["elements"], 1);
        assert!(status["last_activity"].is_string());
    }

    #[tokio::test]
    async fn test_reset() {
        let (state, app) = app();
        state.printer.feed(b"abc\n");
        let res = app
            .oneshot(Request::post("/api/reset").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert!(state.printer.is_empty());
        assert_eq!(state.revision(), 2);
    }

    #[tokio::test]
    async fn test_wait_returns_when_already_newer() {
        let (state, app) = app();
        state.printer.feed(b"a");
        let res = get_json(app, "/api/document/wait?since=0").await;
        assert_eq!(res, json!({"revision": 1, "changed": true}));
    }

    #[tokio::test]
    async fn test_wait_wakes_on_feed() {
        let (state, app) = app();
        let waiter = tokio::spawn(get_json(app, "/api/document/wait?since=0"));
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        state.printer.feed(b"x");
        let res = waiter.await.unwrap();
        assert_eq!(res["changed"], true);
    }
}

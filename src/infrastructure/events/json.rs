//! JSON Event Sink
//!
//! Outputs lot events as NDJSON for scripting.

use crate::domain::ports::{LotEvent, LotEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON shape of an event (shared with commands that print directly)
pub fn event_to_json(event: &LotEvent) -> serde_json::Value {
    match event {
        LotEvent::Loaded {
            path,
            restored,
            skipped,
        } => serde_json::json!({
            "event": "loaded",
            "path": path.display().to_string(),
            "restored": restored,
            "skipped": skipped,
        }),

        LotEvent::Admitted { category, plate } => serde_json::json!({
            "event": "admitted",
            "category": category,
            "plate": plate,
        }),

        LotEvent::Rejected { category, plate } => serde_json::json!({
            "event": "rejected",
            "reason": "lot_full",
            "category": category,
            "plate": plate,
        }),

        LotEvent::Released(receipt) => serde_json::json!({
            "event": "released",
            "plate": receipt.plate,
            "category": receipt.category,
            "admitted_at": receipt.admitted_at,
            "released_at": receipt.released_at,
            "fee": receipt.fee,
        }),

        LotEvent::NotFound { plate } => serde_json::json!({
            "event": "not_found",
            "plate": plate,
        }),

        LotEvent::Saved { path, count } => serde_json::json!({
            "event": "saved",
            "path": path.display().to_string(),
            "count": count,
        }),
    }
}

impl LotEventSink for JsonEventSink {
    fn on_event(&self, event: LotEvent) {
        self.write_event(event_to_json(&event));
    }
}

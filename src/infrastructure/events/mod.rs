//! Event Sink Implementations
//!
//! Provides concrete implementations of LotEventSink:
//! - JsonEventSink: NDJSON output for scripting
//!
//! The human-readable console sink lives with the UI in the binary.

mod json;

pub use json::{event_to_json, JsonEventSink};

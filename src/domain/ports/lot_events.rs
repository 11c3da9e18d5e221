//! Lot Event Port
//!
//! Admissions and releases produce caller-visible notifications. The
//! service reports them through this port; the CLI decides how to render.

use std::path::PathBuf;

use crate::domain::entities::Receipt;
use crate::domain::value_objects::{LicensePlate, VehicleCategory};

/// Event emitted by lot operations
#[derive(Debug, Clone, PartialEq)]
pub enum LotEvent {
    /// Persisted vehicles were restored at startup
    Loaded {
        path: PathBuf,
        restored: usize,
        skipped: usize,
    },

    /// A vehicle took a space
    Admitted {
        category: VehicleCategory,
        plate: LicensePlate,
    },

    /// Admission refused because every space is taken
    Rejected {
        category: VehicleCategory,
        plate: LicensePlate,
    },

    /// A vehicle left and paid
    Released(Receipt),

    /// Release requested for a plate that is not parked
    NotFound { plate: String },

    /// Parked vehicles were written to storage
    Saved { path: PathBuf, count: usize },
}

/// Trait for receiving lot events
///
/// Implementations:
/// - ConsoleEventSink (binary): human-readable lines and receipts
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: silent operation
pub trait LotEventSink {
    fn on_event(&self, event: LotEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl LotEventSink for NoopEventSink {
    fn on_event(&self, _event: LotEvent) {}
}

impl<T: LotEventSink + ?Sized> LotEventSink for &T {
    fn on_event(&self, event: LotEvent) {
        (**self).on_event(event)
    }
}

impl<T: LotEventSink + ?Sized> LotEventSink for Box<T> {
    fn on_event(&self, event: LotEvent) {
        (**self).on_event(event)
    }
}

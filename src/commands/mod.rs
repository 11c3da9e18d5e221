//! Command handlers
//!
//! Each one-shot command opens the lot, acts, and saves before returning.

pub mod interactive;
pub mod park;
pub mod status;
pub mod unpark;
pub mod version;

use std::path::PathBuf;

use anyhow::Result;
use parklot::infrastructure::JsonEventSink;
use parklot::presentation::factory::{open_parking_service, ConcreteParkingService};
use parklot::{LotEventSink, ParkingResult};

use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;

pub type CliParkingService = ConcreteParkingService<Box<dyn LotEventSink>>;

/// What every command needs: where the lot lives and how to talk
pub struct CommandContext {
    pub ui: UiContext,
    pub data_file: PathBuf,
}

impl CommandContext {
    pub fn new(ui: UiContext, data_file: impl Into<PathBuf>) -> Self {
        Self {
            ui,
            data_file: data_file.into(),
        }
    }

    /// Open the lot with an event sink matching the output mode.
    ///
    /// `lifecycle` controls the "loaded"/"saved" notices in text mode.
    pub fn open_service(&self, lifecycle: bool) -> CliParkingService {
        let events: Box<dyn LotEventSink> = if self.ui.json {
            Box::new(JsonEventSink::stdout())
        } else {
            Box::new(ConsoleEventSink::stdout(&self.ui).lifecycle(lifecycle))
        };
        open_parking_service(&self.data_file, events)
    }
}

/// Save and close the lot, then report the command's own outcome first
pub(crate) fn finish<T>(service: CliParkingService, outcome: ParkingResult<T>) -> Result<T> {
    let saved = service.shutdown();
    let value = outcome?;
    saved?;
    Ok(value)
}

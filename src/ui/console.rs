//! Console Event Sink
//!
//! Renders lot events as the human-readable lines of the interactive
//! program: admission notices, receipts, and load/save confirmations.

use std::io::{self, Write};
use std::sync::Mutex;

use parklot::{LotEvent, LotEventSink};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::receipt::render_receipt;

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    unicode: bool,
    lifecycle: bool,
}

impl ConsoleEventSink {
    pub fn stdout(ui: &UiContext) -> Self {
        Self::with_writer(io::stdout(), ui.color, ui.unicode)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, color: bool, unicode: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color,
            unicode,
            lifecycle: true,
        }
    }

    /// Show or hide the load/save confirmations
    pub fn lifecycle(mut self, show: bool) -> Self {
        self.lifecycle = show;
        self
    }

    fn render(&self, event: &LotEvent) -> Option<String> {
        let (color, unicode) = (self.color, self.unicode);
        let line = |icon: Icon, text: ColoredText| {
            format!("{} {}\n", icon.colored(color, unicode), text.render(color))
        };

        match event {
            LotEvent::Loaded { path, skipped, .. } => {
                if !self.lifecycle {
                    return None;
                }
                let mut out = line(Icon::Success, ColoredText::plain("Previous data loaded."));
                if *skipped > 0 {
                    out.push_str(&line(
                        Icon::Warning,
                        ColoredText::warning(format!(
                            "{} unreadable line(s) in {} were skipped",
                            skipped,
                            path.display()
                        )),
                    ));
                }
                Some(out)
            }

            LotEvent::Admitted { category, plate } => Some(line(
                Icon::Park,
                ColoredText::success(format!("{} ({}) parked successfully.", category, plate)),
            )),

            LotEvent::Rejected { plate, .. } => Some(line(
                Icon::Error,
                ColoredText::error(format!("Parking Lot is Full! {} cannot enter.", plate)),
            )),

            LotEvent::Released(receipt) => Some(render_receipt(receipt, color, unicode)),

            LotEvent::NotFound { plate } => Some(line(
                Icon::Error,
                ColoredText::error(format!("ERROR: Vehicle with plate {} not found!", plate)),
            )),

            LotEvent::Saved { .. } => self
                .lifecycle
                .then(|| line(Icon::Save, ColoredText::plain("Data saved successfully."))),
        }
    }
}

impl LotEventSink for ConsoleEventSink {
    fn on_event(&self, event: LotEvent) {
        let Some(text) = self.render(&event) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(text.as_bytes());
            let _ = writer.flush();
        }
    }
}

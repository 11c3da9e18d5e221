use parklot::LotSnapshot;

use crate::ui::blocks::occupancy::OccupancyHeader;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub struct StatusView<'a> {
    snapshot: &'a LotSnapshot,
}

impl<'a> StatusView<'a> {
    pub fn new(snapshot: &'a LotSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        let header = OccupancyHeader::from_snapshot(self.snapshot);
        out.push_str(&header.render(supports_color, supports_unicode));

        if self.snapshot.is_empty() {
            out.push_str(&format!(
                "{}\n",
                ColoredText::dim("Parking lot is currently empty.").render(supports_color)
            ));
            return out;
        }

        let style = if self.snapshot.available() == 0 {
            BoxStyle::Warning
        } else {
            BoxStyle::Info
        };
        let mut b = Box::with_style(style);
        for vehicle in &self.snapshot.vehicles {
            b.add_line(vehicle.describe());
        }
        out.push_str(&b.render(supports_color, supports_unicode));
        out
    }
}

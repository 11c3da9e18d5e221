use parklot::{VehicleCategory, LOT_CAPACITY};

use crate::ui::money;
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub fn render_version(version: &str, supports_color: bool, supports_unicode: bool) -> String {
    let mut b = Box::with_style(BoxStyle::Info);
    b.add_line(format!("Parklot v{}", version));
    b.add_field("Capacity", format!("{} spaces", LOT_CAPACITY));
    b.add_empty();
    b.add_line("Hourly rates (1 hour minimum):");
    for category in VehicleCategory::ALL {
        b.add_line(format!(
            "  - {:<10} {}",
            category.as_str(),
            money(category.hourly_rate())
        ));
    }
    b.render(supports_color, supports_unicode)
}

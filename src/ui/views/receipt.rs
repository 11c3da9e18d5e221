use parklot::domain::entities::format_timestamp;
use parklot::Receipt;

use crate::ui::money;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Exit receipt for a released vehicle
pub fn render_receipt(receipt: &Receipt, supports_color: bool, supports_unicode: bool) -> String {
    let title = ColoredText::info(format!("[EXIT] {} is leaving.", receipt.plate))
        .bold()
        .render(supports_color);

    let hours = receipt.released_at.saturating_sub(receipt.admitted_at).max(0) as f64
        / parklot::domain::entities::SECONDS_PER_HOUR;

    let mut b = Box::with_title(title).style(BoxStyle::Success);
    b.add_empty();
    b.add_field("Vehicle Type", receipt.category.as_str());
    b.add_field("Entry", format_timestamp(receipt.admitted_at));
    b.add_field("Parked", format!("{:.2} h", hours));
    b.add_field(
        "Total Fee",
        ColoredText::success(money(receipt.fee)).render(supports_color),
    );
    b.render(supports_color, supports_unicode)
}

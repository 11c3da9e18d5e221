use parklot::LotSnapshot;

use crate::ui::money;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

/// Status title with a per-space gauge, then revenue and free spaces.
///
/// A full lot switches the icon and gauge to the warning color.
#[derive(Debug, Clone)]
pub struct OccupancyHeader {
    occupied: usize,
    capacity: usize,
    revenue: f64,
}

impl OccupancyHeader {
    pub fn from_snapshot(snapshot: &LotSnapshot) -> Self {
        Self {
            occupied: snapshot.occupied,
            capacity: snapshot.capacity,
            revenue: snapshot.total_revenue,
        }
    }

    fn is_full(&self) -> bool {
        self.occupied >= self.capacity
    }

    pub fn gauge(&self, supports_unicode: bool) -> String {
        let (taken, free) = if supports_unicode {
            (theme::spaces::TAKEN, theme::spaces::FREE)
        } else {
            (theme::spaces_ascii::TAKEN, theme::spaces_ascii::FREE)
        };
        let free_count = self.capacity.saturating_sub(self.occupied);
        format!(
            "[{}{}]",
            taken.repeat(self.occupied.min(self.capacity)),
            free.repeat(free_count)
        )
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "PARKING LOT STATUS ({}/{})",
            self.occupied, self.capacity
        );
        let (icon, gauge) = if self.is_full() {
            (
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning(self.gauge(supports_unicode)),
            )
        } else {
            (
                Icon::Status.colored(supports_color, supports_unicode),
                ColoredText::dim(self.gauge(supports_unicode)),
            )
        };

        format!(
            "{} {} {}\nTotal Revenue: {}\nFree spaces: {}\n",
            icon,
            ColoredText::info(title).bold().render(supports_color),
            gauge.render(supports_color),
            money(self.revenue),
            self.capacity.saturating_sub(self.occupied)
        )
    }
}

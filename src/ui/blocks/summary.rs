use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed end-of-run summary
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    stats: Vec<(String, String)>,
    infos: Vec<String>,
    warnings: Vec<String>,
}

impl ResultSummary {
    fn new(title: impl Into<String>, success: bool) -> Self {
        Self {
            title: title.into(),
            success,
            stats: Vec::new(),
            infos: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, true)
    }

    pub fn partial(title: impl Into<String>) -> Self {
        Self::new(title, false)
    }

    pub fn add_stat(&mut self, label: impl Into<String>, value: impl ToString) {
        self.stats.push((label.into(), value.to_string()));
    }

    /// Add an informational message (shown with success icon)
    pub fn add_info(&mut self, message: impl Into<String>) {
        self.infos.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (style, icon, title) = if self.success {
            (
                BoxStyle::Success,
                Icon::Success,
                ColoredText::success(self.title.as_str()),
            )
        } else {
            (
                BoxStyle::Warning,
                Icon::Warning,
                ColoredText::warning(self.title.as_str()),
            )
        };

        let header = format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            title.bold().render(supports_color)
        );

        let mut b = Box::with_title(header).style(style);
        b.add_empty();

        for (label, value) in &self.stats {
            b.add_line(format!("{} {}", value, label));
        }

        if !self.infos.is_empty() {
            b.add_empty();
            for info in &self.infos {
                b.add_line(format!(
                    "{} {}",
                    Icon::Success.colored(supports_color, supports_unicode),
                    info
                ));
            }
        }

        if !self.warnings.is_empty() {
            b.add_empty();
            for warning in &self.warnings {
                b.add_line(format!(
                    "{} {}",
                    Icon::Warning.colored(supports_color, supports_unicode),
                    warning
                ));
            }
        }

        b.render(supports_color, supports_unicode)
    }
}

use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Pointer,
    Park,
    Status,
    Save,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Pointer) => theme::icons::POINTER,
            (true, Icon::Park) => theme::icons::PARK,
            (true, Icon::Status) => theme::icons::STATUS,
            (true, Icon::Save) => theme::icons::SAVE,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Pointer) => theme::icons_ascii::POINTER,
            (false, Icon::Park) => theme::icons_ascii::PARK,
            (false, Icon::Status) => theme::icons_ascii::STATUS,
            (false, Icon::Save) => theme::icons_ascii::SAVE,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Save => theme::colors::SUCCESS,
            Icon::Error | Icon::Pointer => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Park | Icon::Status => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

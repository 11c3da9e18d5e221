use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderChar {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Horizontal,
    Vertical,
}

impl BorderChar {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use theme::{borders as u, borders_ascii as a};

        match self {
            BorderChar::TopLeft if supports_unicode => u::TOP_LEFT,
            BorderChar::TopLeft => a::TOP_LEFT,
            BorderChar::TopRight if supports_unicode => u::TOP_RIGHT,
            BorderChar::TopRight => a::TOP_RIGHT,
            BorderChar::BottomLeft if supports_unicode => u::BOTTOM_LEFT,
            BorderChar::BottomLeft => a::BOTTOM_LEFT,
            BorderChar::BottomRight if supports_unicode => u::BOTTOM_RIGHT,
            BorderChar::BottomRight => a::BOTTOM_RIGHT,
            BorderChar::Horizontal if supports_unicode => u::HORIZONTAL,
            BorderChar::Horizontal => a::HORIZONTAL,
            BorderChar::Vertical if supports_unicode => u::VERTICAL,
            BorderChar::Vertical => a::VERTICAL,
        }
    }
}

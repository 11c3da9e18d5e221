use crossterm::style::Color;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use std::fmt;

use crate::ui::primitives::icon::Icon;

/// Design tokens for the parklot UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const POINTER: &str = "❯";

    // Command identifiers (used in headers).
    pub const PARK: &str = "🅿";
    pub const STATUS: &str = "▤";
    pub const SAVE: &str = "💾";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const POINTER: &str = ">";

    pub const PARK: &str = "[PARK]";
    pub const STATUS: &str = "[STATUS]";
    pub const SAVE: &str = "[SAVE]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

/// One cell per parking space in the occupancy gauge
pub mod spaces {
    pub const TAKEN: &str = "■";
    pub const FREE: &str = "□";
}

pub mod spaces_ascii {
    pub const TAKEN: &str = "#";
    pub const FREE: &str = ".";
}

// ----------------------------------------------------------------------------
// ParklotTheme - dialoguer theme following the design tokens
// ----------------------------------------------------------------------------

/// Custom theme for dialoguer prompts.
///
/// Wraps `ColorfulTheme` (or `SimpleTheme` when color is off) and only
/// overrides the select item formatting so the cursor uses our pointer icon.
pub struct ParklotTheme {
    unicode: bool,
    color: bool,
    colorful: ColorfulTheme,
}

impl ParklotTheme {
    pub fn new(color: bool, unicode: bool) -> Self {
        Self {
            unicode,
            color,
            colorful: ColorfulTheme::default(),
        }
    }

    pub fn pointer_icon(&self) -> &'static str {
        Icon::Pointer.render(self.unicode)
    }

    fn inner(&self) -> &dyn Theme {
        if self.color {
            &self.colorful
        } else {
            &SimpleTheme
        }
    }
}

impl Theme for ParklotTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner().format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner().format_error(f, err)
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        self.inner().format_input_prompt(f, prompt, default)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner().format_input_prompt_selection(f, prompt, sel)
    }

    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner().format_select_prompt(f, prompt)
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner().format_select_prompt_selection(f, prompt, sel)
    }

    // The only method customized: cursor uses the pointer icon
    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        if active {
            write!(f, "{} {}", self.pointer_icon(), text)
        } else {
            write!(f, "{} {}", " ".repeat(self.pointer_icon().chars().count()), text)
        }
    }
}

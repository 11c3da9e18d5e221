use parklot::config::{ConfigWarning, LoadedConfig};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn format_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = Icon::Warning.colored(supports_color, supports_unicode);
    let mut out = String::new();
    for w in warnings {
        match w.line {
            Some(line) => out.push_str(&format!(
                "{} Unknown config key '{}' in {}:{}\n",
                icon,
                w.key,
                w.file.display(),
                line
            )),
            None => out.push_str(&format!(
                "{} Unknown config key '{}' in {}\n",
                icon,
                w.key,
                w.file.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }
    out
}

pub fn format_config_errors(errors: &[String], supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Warning.colored(supports_color, supports_unicode);
    errors
        .iter()
        .map(|e| format!("{} Ignoring config: {}\n", icon, e))
        .collect()
}

/// Config problems go to stderr so they never corrupt `--json` output
pub fn print_config_warnings(loaded: &LoadedConfig, ui: &UiContext) {
    eprint!("{}", format_config_errors(&loaded.errors, ui.color, ui.unicode));
    eprint!(
        "{}",
        format_config_warnings(&loaded.warnings, ui.color, ui.unicode)
    );
}

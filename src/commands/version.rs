use anyhow::Result;

use crate::ui::context::UiContext;

pub fn cmd_version(ui: &UiContext) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "version",
            "version": version,
            "capacity": parklot::LOT_CAPACITY,
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        crate::ui::views::version::render_version(version, ui.color, ui.unicode)
    );
    Ok(())
}

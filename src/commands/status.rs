//! Status command
//!
//! Read-only: the data file is loaded but never rewritten. Revenue is
//! per session, so a fresh process always reports zero.

use anyhow::Result;

use super::CommandContext;
use crate::ui::views::status::StatusView;

pub fn cmd_status(ctx: &CommandContext) -> Result<()> {
    let service = ctx.open_service(ctx.ui.verbose > 0);
    let snapshot = service.status();

    if ctx.ui.json {
        crate::ui::json::emit(crate::ui::json::status_event(&snapshot))?;
        return Ok(());
    }

    print!(
        "{}",
        StatusView::new(&snapshot).render(ctx.ui.color, ctx.ui.unicode)
    );
    Ok(())
}

//! Interactive command module
//!
//! Running `parklot` without a subcommand opens a menu loop over the lot.
//! The lot is loaded once on entry and saved once on "Exit & Save" or
//! Ctrl-C at a prompt.

mod menu;

use anyhow::Result;
use is_terminal::IsTerminal;

use super::CommandContext;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::money;

use menu::SessionTally;

pub fn cmd_interactive(ctx: &CommandContext) -> Result<()> {
    if ctx.ui.json {
        // Nothing to prompt for; describe the lot instead
        return super::status::cmd_status(ctx);
    }

    if !std::io::stdin().is_terminal() {
        println!("No command provided.");
        println!("Try: `parklot park car AB-123`, `parklot status` or `parklot --help`");
        return Ok(());
    }

    print!(
        "{}",
        crate::ui::views::interactive::render_banner(ctx.ui.color, ctx.ui.unicode)
    );

    let mut service = ctx.open_service(true);
    let outcome = menu::run_menu(&mut service, &ctx.ui);

    // Save even when a prompt failed; shutdown logs its own failure.
    let saved = service.shutdown();
    let tally = outcome?;
    print!("{}", render_session_summary(&tally, saved.is_ok(), &ctx.ui));
    println!("System shutting down. Goodbye!");
    saved.map_err(Into::into)
}

fn render_session_summary(
    tally: &SessionTally,
    saved: bool,
    ui: &crate::ui::context::UiContext,
) -> String {
    let mut summary = if saved {
        ResultSummary::success("Session Closed")
    } else {
        ResultSummary::partial("Session Closed")
    };
    summary.add_stat("vehicle(s) parked", tally.parked);
    summary.add_stat("vehicle(s) released", tally.released);
    summary.add_info(format!("Revenue this session: {}", money(tally.revenue)));
    if !saved {
        summary.add_warning("Changes since startup could not be saved");
    }
    summary.render(ui.color, ui.unicode)
}

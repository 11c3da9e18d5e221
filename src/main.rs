//! Parklot CLI - parking lot tracker
//!
//! Usage: parklot [COMMAND]
//!
//! Commands:
//!   park     Admit a vehicle into the lot
//!   unpark   Release a vehicle and print its receipt
//!   status   Show occupancy, revenue and parked vehicles
//!   version  Show version information
//!
//! Without a command, an interactive menu opens.

mod commands;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use parklot::config::{Config, Verbosity};
use parklot::presentation::{Cli, Commands};

use commands::CommandContext;
use ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().ok();
    let loaded = Config::resolve(cwd.as_deref());
    let config = &loaded.config;

    init_logging(cli.verbose, config.output.verbosity);

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, config);
    ui::output::print_config_warnings(&loaded, &ui);
    if let Some(path) = &loaded.path {
        log::debug!("using config {}", path.display());
    }

    let data_file = cli
        .data_file
        .unwrap_or_else(|| config.storage.data_file.clone());
    let ctx = CommandContext::new(ui, data_file);

    let result = match cli.command {
        Some(Commands::Park { category, plate }) => {
            commands::park::cmd_park(&ctx, category, &plate)
        }
        Some(Commands::Unpark { plate }) => commands::unpark::cmd_unpark(&ctx, &plate),
        Some(Commands::Status) => commands::status::cmd_status(&ctx),
        Some(Commands::Version) => commands::version::cmd_version(&ctx.ui),
        None => commands::interactive::cmd_interactive(&ctx),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !ui::error::already_reported(&err) {
                ui::error::print_error(&err, &ctx.ui);
            }
            ExitCode::FAILURE
        }
    }
}

/// `-v` flags win over the configured verbosity; `RUST_LOG` wins over both.
fn init_logging(verbose: u8, configured: Verbosity) {
    let level = match verbose {
        0 => configured.log_level(),
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

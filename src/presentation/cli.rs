//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --data-file) are inherited by all subcommands
//! - Running without a subcommand opens the interactive menu

use std::path::PathBuf;

use crate::domain::value_objects::VehicleCategory;
use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Parklot - parking lot tracker with hourly fees
#[derive(Parser, Debug)]
#[command(name = "parklot")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'parklot' without arguments for the interactive menu.")]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Data file holding parked vehicles (default: parking_data.txt)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Admit a vehicle into the lot
    Park {
        /// Vehicle category
        #[arg(value_enum)]
        category: VehicleCategory,

        /// License plate (single token, no spaces)
        plate: String,
    },

    /// Release a vehicle and print its receipt
    Unpark {
        /// License plate of the leaving vehicle
        plate: String,
    },

    /// Show occupancy, revenue and parked vehicles
    Status,

    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_command_is_interactive() {
        let cli = Cli::try_parse_from(["parklot"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_park() {
        let cli = Cli::try_parse_from(["parklot", "park", "truck", "TR-1"]).unwrap();
        if let Some(Commands::Park { category, plate }) = cli.command {
            assert_eq!(category, VehicleCategory::Truck);
            assert_eq!(plate, "TR-1");
        } else {
            panic!("Expected Park command");
        }
    }

    #[test]
    fn test_cli_parse_park_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["parklot", "park", "bus", "B-1"]).is_err());
    }

    #[test]
    fn test_cli_parse_unpark() {
        let cli = Cli::try_parse_from(["parklot", "unpark", "AB-123"]).unwrap();
        if let Some(Commands::Unpark { plate }) = cli.command {
            assert_eq!(plate, "AB-123");
        } else {
            panic!("Expected Unpark command");
        }
    }

    #[test]
    fn test_cli_json_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["parklot", "status", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Commands::Status)));
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["parklot", "-vv", "status"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_data_file_flag() {
        let cli =
            Cli::try_parse_from(["parklot", "status", "--data-file", "/tmp/lot.txt"]).unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/lot.txt")));
    }

    #[test]
    fn test_cli_color_flag() {
        let cli = Cli::try_parse_from(["parklot", "--color", "never", "status"]).unwrap();
        assert!(matches!(cli.color, Some(ColorWhen::Never)));
    }

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["parklot", "version", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Commands::Version)));
    }
}

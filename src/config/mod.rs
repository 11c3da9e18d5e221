//! Configuration module for parklot
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PARKLOT_*)
//! 3. Project config (./parklot.toml)
//! 4. User config (~/.config/parklot/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, OutputConfig, StorageConfig, Verbosity};

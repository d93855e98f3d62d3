//! Configuration module for Herald
//!
//! Implements the configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (HERALD_*)
//! 3. Explicit `--config` file
//! 4. Project config (`.herald.toml`, found from the working directory up to the repository root)
//! 5. User config (~/.config/herald/config.toml)
//! 6. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{find_project_config, user_config_path, ConfigWarning, LoadedConfig};
pub use types::{ColorMode, Config, MarkerConfig, NotifyConfig, OutputConfig, WalkerConfig};

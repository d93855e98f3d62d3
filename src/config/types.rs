//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{MarkerName, DEFAULT_MARKER_NAME, DEFAULT_MARKER_PACKAGE};
use crate::error::HeraldResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Which annotation marks a declaration as watched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerConfig {
    #[serde(default = "default_marker_name")]
    pub name: String,

    #[serde(default = "default_marker_package")]
    pub package: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            name: default_marker_name(),
            package: default_marker_package(),
        }
    }
}

impl MarkerConfig {
    pub fn marker_name(&self) -> MarkerName {
        MarkerName::new(self.package.as_str(), self.name.as_str())
    }
}

fn default_marker_name() -> String {
    DEFAULT_MARKER_NAME.to_string()
}

fn default_marker_package() -> String {
    DEFAULT_MARKER_PACKAGE.to_string()
}

/// Revision range and file filter for the git walker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkerConfig {
    #[serde(default = "default_base")]
    pub base: String,

    #[serde(default = "default_head")]
    pub head: String,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            head: default_head(),
            extensions: default_extensions(),
        }
    }
}

fn default_base() -> String {
    "HEAD~1".to_string()
}

fn default_head() -> String {
    "HEAD".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["java".to_string()]
}

/// Notifier selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyConfig {
    #[serde(default = "default_notifiers")]
    pub notifiers: Vec<String>,

    /// Unchanged lines shown around each diff hunk
    #[serde(default = "default_diff_context")]
    pub diff_context: usize,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            notifiers: default_notifiers(),
            diff_context: default_diff_context(),
        }
    }
}

fn default_notifiers() -> Vec<String> {
    vec!["console".to_string()]
}

fn default_diff_context() -> usize {
    3
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub marker: MarkerConfig,

    #[serde(default)]
    pub walker: WalkerConfig,

    #[serde(default)]
    pub notify: NotifyConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a single TOML file
    pub fn load(path: &Path) -> HeraldResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> HeraldResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load every layer below the CLI flags, starting the project search at `cwd`
    pub fn load_layered(cwd: &Path, explicit: Option<&Path>) -> HeraldResult<LoadedConfig> {
        loader::load_layered(cwd, explicit)
    }

    /// Apply environment variable overrides (HERALD_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }
}

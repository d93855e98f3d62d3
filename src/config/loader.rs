//! Configuration loading and layering

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::value_objects::MarkerName;
use crate::error::{HeraldError, HeraldResult};

use super::types::{ColorMode, Config};

/// File name of the project-level configuration
pub const PROJECT_CONFIG_FILE: &str = ".herald.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Result of loading every configuration layer
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// Files that contributed, lowest priority first
    pub sources: Vec<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> HeraldResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    let config = parse_checked(path, &content)?.0;
    let warnings = unknown_keys(path, &content)?;
    Ok((config, warnings))
}

/// Merge the user, project and explicit config files
///
/// A later layer overrides individual keys of an earlier one; keys it does
/// not mention keep their lower-layer value.
pub fn load_layered(cwd: &Path, explicit: Option<&Path>) -> HeraldResult<LoadedConfig> {
    let mut layers: Vec<PathBuf> = Vec::new();
    if let Some(user) = user_config_path().filter(|p| p.is_file()) {
        layers.push(user);
    }
    if let Some(project) = find_project_config(cwd) {
        layers.push(project);
    }
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(HeraldError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        layers.push(path.to_path_buf());
    }
    load_files(&layers)
}

pub(crate) fn load_files(layers: &[PathBuf]) -> HeraldResult<LoadedConfig> {
    let mut merged = toml::Table::new();
    let mut warnings = Vec::new();

    for path in layers {
        let content = fs::read_to_string(path)?;
        let (_, table) = parse_checked(path, &content)?;
        warnings.extend(unknown_keys(path, &content)?);
        merge_tables(&mut merged, table);
        debug!(path = %path.display(), "loaded config layer");
    }

    let config: Config =
        toml::Value::Table(merged)
            .try_into()
            .map_err(|e: toml::de::Error| HeraldError::Config {
                file: layers.last().cloned().unwrap_or_default(),
                message: e.to_string(),
            })?;

    Ok(LoadedConfig {
        config,
        warnings,
        sources: layers.to_vec(),
    })
}

/// `$XDG_CONFIG_HOME/herald/config.toml`, falling back to `~/.config/herald/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .map(|dir| dir.join("herald").join("config.toml"))
}

/// Nearest `.herald.toml` from `start` upwards, not leaving the enclosing repository
pub fn find_project_config(start: &Path) -> Option<PathBuf> {
    let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());
    for dir in start.ancestors() {
        let candidate = dir.join(PROJECT_CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            return None;
        }
    }
    None
}

/// Apply environment variable overrides (HERALD_* prefix)
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    // HERALD_MARKER (qualified annotation name)
    if let Some(marker) = get_env("HERALD_MARKER").filter(|v| !v.trim().is_empty()) {
        let marker = MarkerName::parse(&marker);
        config.marker.name = marker.simple_name().to_string();
        config.marker.package = marker.package().to_string();
    }

    if let Some(base) = get_env("HERALD_BASE").filter(|v| !v.trim().is_empty()) {
        config.walker.base = base.trim().to_string();
    }

    if let Some(head) = get_env("HERALD_HEAD").filter(|v| !v.trim().is_empty()) {
        config.walker.head = head.trim().to_string();
    }

    // HERALD_NOTIFIERS (comma-separated)
    if let Some(notifiers) = get_env("HERALD_NOTIFIERS") {
        let parsed: Vec<String> = notifiers
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if !parsed.is_empty() {
            config.notify.notifiers = parsed;
        }
    }

    if let Some(color) = get_env("HERALD_COLOR") {
        match ColorMode::parse(&color) {
            Some(mode) => config.output.color = mode,
            None => warn!(
                value = color.as_str(),
                "ignoring invalid HERALD_COLOR (expected auto, always or never)"
            ),
        }
    }

    config
}

fn parse_checked(path: &Path, content: &str) -> HeraldResult<(Config, toml::Table)> {
    let invalid = |message: String| HeraldError::Config {
        file: path.to_path_buf(),
        message,
    };
    let table: toml::Table = content.parse().map_err(|e: toml::de::Error| invalid(e.to_string()))?;
    let config: Config = toml::from_str(content).map_err(|e| invalid(e.to_string()))?;
    Ok((config, table))
}

fn unknown_keys(path: &Path, content: &str) -> HeraldResult<Vec<ConfigWarning>> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let _: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| HeraldError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect())
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "marker",
        "name",
        "package",
        "walker",
        "base",
        "head",
        "extensions",
        "notify",
        "notifiers",
        "diff_context",
        "output",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

//! Configuration file loading with precedence handling.

use crate::layout::measurement::{DEFAULT_HEIGHT_PERCENT, DEFAULT_WIDTH_MARGIN};
use crate::layout::BudgetPolicy;
use crate::model::Align;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Upper bound on the number of menu items.
pub const MAX_ITEMS: usize = 200;

/// Narrowest column the popover will lay out.
pub const MIN_COLUMN_WIDTH: u16 = 8;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A key parsed but its value is out of range.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Offending key.
        key: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/colbar/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Number of items in the popover menu.
    #[serde(default)]
    pub items_count: Option<usize>,

    /// Bar alignment: "left", "center" or "right".
    #[serde(default)]
    pub align: Option<Align>,

    /// Share (1..=100) of the rows below the bar usable by one column.
    #[serde(default)]
    pub budget_percent: Option<u8>,

    /// Columns kept free at the right edge of the screen.
    #[serde(default)]
    pub width_margin: Option<u16>,

    /// Width of one packed column, including the gap.
    #[serde(default)]
    pub column_width: Option<u16>,

    /// JSON menu catalogue to use instead of generated items.
    #[serde(default)]
    pub menu_file: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Number of menu items.
    pub items_count: usize,
    /// Bar alignment.
    pub align: Align,
    /// Height share for the column budget.
    pub budget_percent: u8,
    /// Right-edge margin for the width budget.
    pub width_margin: u16,
    /// Column width.
    pub column_width: u16,
    /// Optional menu catalogue.
    pub menu_file: Option<PathBuf>,
    /// Start with the popover open.
    pub open_on_start: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            items_count: 12,
            align: Align::Left,
            budget_percent: DEFAULT_HEIGHT_PERCENT,
            width_margin: DEFAULT_WIDTH_MARGIN,
            column_width: 24,
            menu_file: None,
            open_on_start: false,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Budget derivation settings for the measurement provider.
    pub fn budget_policy(&self) -> BudgetPolicy {
        BudgetPolicy {
            height_percent: self.budget_percent,
            width_margin: self.width_margin,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/colbar/colbar.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("colbar").join("colbar.log")
    } else {
        PathBuf::from("colbar.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/colbar/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("colbar").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `COLBAR_CONFIG` environment variable
/// 3. Default path `~/.config/colbar/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("COLBAR_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns `InvalidValue` for an out-of-range `budget_percent` or `column_width`.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let budget_percent = config.budget_percent.unwrap_or(defaults.budget_percent);
    if !(1..=100).contains(&budget_percent) {
        return Err(ConfigError::InvalidValue {
            key: "budget_percent",
            reason: format!("{} is not within 1..=100", budget_percent),
        });
    }

    let column_width = config.column_width.unwrap_or(defaults.column_width);
    if column_width < MIN_COLUMN_WIDTH {
        return Err(ConfigError::InvalidValue {
            key: "column_width",
            reason: format!("{} is narrower than {}", column_width, MIN_COLUMN_WIDTH),
        });
    }

    let items_count = config.items_count.unwrap_or(defaults.items_count);
    if items_count > MAX_ITEMS {
        return Err(ConfigError::InvalidValue {
            key: "items_count",
            reason: format!("{} exceeds the maximum of {}", items_count, MAX_ITEMS),
        });
    }

    Ok(ResolvedConfig {
        items_count,
        align: config.align.unwrap_or(defaults.align),
        budget_percent,
        width_margin: config.width_margin.unwrap_or(defaults.width_margin),
        column_width,
        menu_file: config.menu_file.or(defaults.menu_file),
        open_on_start: defaults.open_on_start,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// An environment variable whose value could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOverride {
    /// Variable name, e.g. `COLBAR_ITEMS`.
    pub variable: &'static str,
    /// Raw value found in the environment.
    pub value: String,
    /// Why it was ignored.
    pub reason: String,
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `COLBAR_ITEMS`: Override item count
/// - `COLBAR_ALIGN`: Override bar alignment
///
/// Unparseable values are ignored and returned alongside the config. This
/// runs before logging is initialized, so callers report them with
/// [`report_rejected_overrides`] once a subscriber is installed.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> (ResolvedConfig, Vec<RejectedOverride>) {
    let mut rejected = Vec::new();

    if let Ok(items) = std::env::var("COLBAR_ITEMS") {
        match items.trim().parse::<usize>() {
            Ok(count) if count <= MAX_ITEMS => config.items_count = count,
            Ok(count) => rejected.push(RejectedOverride {
                variable: "COLBAR_ITEMS",
                value: items.clone(),
                reason: format!("{} exceeds the maximum of {}", count, MAX_ITEMS),
            }),
            Err(err) => rejected.push(RejectedOverride {
                variable: "COLBAR_ITEMS",
                value: items.clone(),
                reason: err.to_string(),
            }),
        }
    }

    if let Ok(align) = std::env::var("COLBAR_ALIGN") {
        match align.parse::<Align>() {
            Ok(parsed) => config.align = parsed,
            Err(err) => rejected.push(RejectedOverride {
                variable: "COLBAR_ALIGN",
                value: align.clone(),
                reason: err.to_string(),
            }),
        }
    }

    (config, rejected)
}

/// Log each rejected environment override at `warn`.
pub fn report_rejected_overrides(rejected: &[RejectedOverride]) {
    for entry in rejected {
        warn!(
            variable = entry.variable,
            value = %entry.value,
            reason = %entry.reason,
            "Ignoring invalid environment override"
        );
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    items_override: Option<usize>,
    align_override: Option<Align>,
    menu_override: Option<PathBuf>,
    open_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(items) = items_override {
        config.items_count = items.min(MAX_ITEMS);
    }

    if let Some(align) = align_override {
        config.align = align;
    }

    if let Some(menu) = menu_override {
        config.menu_file = Some(menu);
    }

    if let Some(open) = open_override {
        config.open_on_start = open;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

#[cfg(test)]
mod log_path_tests {
    use super::*;

    #[test]
    fn default_log_path_ends_with_colbar_log() {
        let path = default_log_path();
        assert!(
            path.to_string_lossy().ends_with("colbar.log"),
            "Default log path should end with 'colbar.log', got: {:?}",
            path
        );
    }

    #[test]
    fn resolved_config_default_includes_log_path() {
        let config = ResolvedConfig::default();
        assert!(
            !config.log_file_path.as_os_str().is_empty(),
            "Default config should have non-empty log_file_path"
        );
    }

    #[test]
    fn config_file_log_path_overrides_default() {
        let custom_path = PathBuf::from("/custom/path/to/app.log");
        let config_file = ConfigFile {
            log_file_path: Some(custom_path.clone()),
            ..ConfigFile::default()
        };

        let resolved = merge_config(Some(config_file)).expect("valid config");
        assert_eq!(
            resolved.log_file_path, custom_path,
            "Config file log_file_path should override default"
        );
    }
}

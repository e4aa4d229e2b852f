//! Runtime configuration for hosts embedding the core.
//!
//! # Responsibility
//! - Normalize log level and log directory inputs.
//! - Resolve unset values from the environment, then build-mode defaults.
//!
//! # Invariants
//! - A normalized level is one of `trace|debug|info|warn|error`.
//! - A configured log directory is always absolute.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable consulted when no level is passed explicitly.
pub const LOG_LEVEL_ENV: &str = "QUICKNOTE_LOG_LEVEL";
/// Environment variable consulted when no directory is passed explicitly.
pub const LOG_DIR_ENV: &str = "QUICKNOTE_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    UnsupportedLevel(String),
    #[error("log_dir cannot be empty")]
    EmptyLogDir,
    #[error("log_dir must be an absolute path, got `{0}`")]
    RelativeLogDir(String),
}

/// Where and how verbosely the core logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Normalized level name.
    pub level: &'static str,
    /// Rolling file directory; `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
}

impl LogConfig {
    /// Builds a config from explicit values, validating both.
    pub fn new(level: &str, log_dir: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            level: normalize_level(level)?,
            log_dir: log_dir.map(normalize_log_dir).transpose()?,
        })
    }

    /// Resolves each unset value from `QUICKNOTE_LOG_LEVEL` / `QUICKNOTE_LOG_DIR`,
    /// falling back to `default_log_level()` and stderr.
    pub fn resolve(level: Option<&str>, log_dir: Option<&str>) -> Result<Self, ConfigError> {
        let env_level = non_blank_env(LOG_LEVEL_ENV);
        let env_dir = non_blank_env(LOG_DIR_ENV);
        let level = level
            .or(env_level.as_deref())
            .unwrap_or(default_log_level());
        Self::new(level, log_dir.or(env_dir.as_deref()))
    }
}

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

pub fn normalize_level(level: &str) -> Result<&'static str, ConfigError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(ConfigError::UnsupportedLevel(other.to_string())),
    }
}

pub fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, ConfigError> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyLogDir);
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(ConfigError::RelativeLogDir(trimmed.to_string()));
    }
    Ok(path.to_path_buf())
}

fn non_blank_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

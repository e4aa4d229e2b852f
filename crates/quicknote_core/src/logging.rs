//! Core logging bootstrap and safety policy.
//!
//! # Responsibility
//! - Initialize the process-wide `log` backend exactly once.
//! - Emit metadata-only diagnostic events from core.
//!
//! # Invariants
//! - Logging init is idempotent for an identical `LogConfig`.
//! - Re-initialization with a different level or destination is rejected.
//! - Logging initialization must not panic.
//! - Log lines never carry note text, only ids and lengths.

use crate::config::LogConfig;
use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::path::PathBuf;
use thiserror::Error;

const LOG_FILE_BASENAME: &str = "quicknote";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
// Stderr shares the terminal with the widget itself.
const STDERR_LEVEL_CEILING: &str = "warn";

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("logging already initialized with {active}; refusing to switch to {requested}")]
    Conflict { active: String, requested: String },
    #[error("failed to create log directory `{}`: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to start logger: {0}")]
    Backend(#[from] FlexiLoggerError),
}

struct LoggingState {
    config: LogConfig,
    _logger: LoggerHandle,
}

/// Initializes core logging from a normalized config.
///
/// # Errors
/// - `Conflict` when logging is already active with another config.
/// - `CreateDir` when the log directory cannot be created.
/// - `Backend` when the logger backend fails to start.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let state = LOGGING_STATE.get_or_try_init(|| start_logger(config))?;
    if state.config != *config {
        return Err(LoggingError::Conflict {
            active: describe(&state.config),
            requested: describe(config),
        });
    }
    Ok(())
}

/// Returns the active logging config, or `None` before initialization.
pub fn logging_status() -> Option<LogConfig> {
    LOGGING_STATE.get().map(|state| state.config.clone())
}

fn start_logger(config: &LogConfig) -> Result<LoggingState, LoggingError> {
    let logger = match config.log_dir.as_deref() {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
            Logger::try_with_str(config.level)?
                .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
                .start()?
        }
        None => Logger::try_with_str(stderr_level(config.level))?
            .log_to_stderr()
            .format_for_stderr(flexi_logger::default_format)
            .start()?,
    };

    install_panic_hook_once();

    info!(
        "event=app_start module=core status=ok platform={} build_mode={} version={}",
        std::env::consts::OS,
        build_mode(),
        env!("CARGO_PKG_VERSION")
    );
    info!(
        "event=core_init module=core status=ok {}",
        describe(config)
    );

    Ok(LoggingState {
        config: config.clone(),
        _logger: logger,
    })
}

fn describe(config: &LogConfig) -> String {
    match &config.log_dir {
        Some(dir) => format!("level={} log_dir={}", config.level, dir.display()),
        None => format!("level={} log_dir=stderr", config.level),
    }
}

/// Picks the less verbose of `level` and the stderr ceiling.
fn stderr_level(level: &'static str) -> &'static str {
    match level {
        "error" => "error",
        _ => STDERR_LEVEL_CEILING,
    }
}

fn build_mode() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!(
            "event=panic_captured module=core status=error location={} {}",
            location,
            redacted_payload(panic_info.payload())
        );
        previous_hook(panic_info);
    }));
}

/// Describes a panic payload by shape only.
///
/// Panic messages can quote note text (e.g. a failed assertion on content),
/// so only the payload kind and its size are logged.
fn redacted_payload(payload: &(dyn Any + Send)) -> String {
    let text: Option<&str> = if let Some(message) = payload.downcast_ref::<&str>() {
        Some(*message)
    } else {
        payload.downcast_ref::<String>().map(String::as_str)
    };
    match text {
        Some(text) => format!(
            "payload=text chars={} lines={}",
            text.chars().count(),
            text.lines().count().max(1)
        ),
        None => "payload=opaque".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{init_logging, logging_status, redacted_payload, stderr_level, LoggingError};
    use crate::config::LogConfig;

    #[test]
    fn panic_payload_is_logged_without_its_text() {
        let owned: String = "note `Call mom` missing\nsecond line".to_string();
        let summary = redacted_payload(&owned);
        assert_eq!(summary, "payload=text chars=35 lines=2");
        assert!(!summary.contains("Call mom"));

        let borrowed: &'static str = "Buy milk";
        assert_eq!(redacted_payload(&borrowed), "payload=text chars=8 lines=1");
        assert_eq!(redacted_payload(&42_u32), "payload=opaque");
    }

    #[test]
    fn stderr_level_never_exceeds_warn() {
        assert_eq!(stderr_level("trace"), "warn");
        assert_eq!(stderr_level("info"), "warn");
        assert_eq!(stderr_level("error"), "error");
    }

    #[test]
    fn init_logging_is_idempotent_for_same_config_and_rejects_conflicts() {
        let log_dir = tempfile::tempdir().expect("temp dir should be created");
        let dir_str = log_dir.path().to_str().expect("temp dir should be valid UTF-8");
        let config = LogConfig::new("info", Some(dir_str)).unwrap();

        init_logging(&config).expect("first init should succeed");
        init_logging(&config).expect("same config should be idempotent");

        let louder = LogConfig::new("debug", Some(dir_str)).unwrap();
        let err = init_logging(&louder).expect_err("level conflict should fail");
        assert!(matches!(err, LoggingError::Conflict { .. }));
        assert!(err.to_string().contains("refusing to switch"));

        let to_stderr = LogConfig::new("info", None).unwrap();
        assert!(init_logging(&to_stderr).is_err());

        assert_eq!(logging_status(), Some(config));
    }
}

//! Structured logging with tracing
//!
//! Configures the global subscriber: level filter, plain or JSON formatting,
//! and an optional daily-rotated log file.

use std::ffi::OsStr;
use std::path::Path;

use casekit_domain::error::{Error, Result};
use tracing::{Level, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_ENV_VAR};
use crate::error_ext::ErrorContext;

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;

/// Initialize logging with the provided configuration
///
/// A filter directive in `CASEKIT_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_sink = config.file_output.as_deref().map(file_appender).transpose()?;
    let registry = Registry::default().with(filter);

    // Formatter types differ, so each output format builds its own stack
    let installed = if config.json_format {
        let stdout = fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        let file = file_sink.map(|appender| {
            fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
        });
        registry.with(stdout).with(file).try_init()
    } else {
        let stdout = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        let file = file_sink.map(|appender| {
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
        });
        registry.with(stdout).with(file).try_init()
    };

    installed.map_err(|e| Error::config(format!("Failed to install log subscriber: {e}")))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Build the daily-rotated appender behind `logging.file_output`
///
/// Files are named `<stem>.<date>` next to the configured path. A directory
/// that cannot be created is a configuration error.
pub fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let prefix = path
        .file_stem()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_STEM))
        .to_string_lossy()
        .into_owned();

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .build(dir)
        .config_context(format!("Failed to open log file in {}", dir.display()))
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "Invalid log level: {}. Use trace, debug, info, warn, or error",
            level
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}

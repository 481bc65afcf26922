//! Logging helper tests

use casekit_domain::error::Error;
use casekit_infrastructure::config::LoggingConfig;
use casekit_infrastructure::logging::{file_appender, init_logging, parse_log_level};
use tempfile::TempDir;
use tracing::Level;

#[test]
fn test_parse_log_level_accepts_known_levels() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn test_parse_log_level_rejects_unknown_level() {
    let err = parse_log_level("loud").unwrap_err();

    assert!(err.to_string().contains("Invalid log level: loud"));
}

#[test]
fn test_file_appender_creates_missing_directory() {
    let temp_dir = TempDir::new().expect("temp dir");
    let log_dir = temp_dir.path().join("logs");

    file_appender(&log_dir.join("casekit.log")).expect("appender builds");

    assert!(log_dir.is_dir());
}

#[test]
fn test_file_appender_under_a_file_is_a_config_error() {
    let temp_dir = TempDir::new().expect("temp dir");
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").expect("write file");

    let err = file_appender(&blocker.join("logs").join("casekit.log"))
        .expect_err("directory under a file cannot be created");

    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("Failed to open log file"));
}

#[test]
fn test_init_logging_reports_unusable_log_path() {
    let temp_dir = TempDir::new().expect("temp dir");
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").expect("write file");

    // Fails before a subscriber is installed, so the global state stays untouched
    let config = LoggingConfig {
        file_output: Some(blocker.join("casekit.log")),
        ..LoggingConfig::default()
    };

    let err = init_logging(&config).expect_err("log path is unusable");
    assert!(matches!(err, Error::Configuration { .. }));
}

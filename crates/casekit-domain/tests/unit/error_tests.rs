//! Unit tests for domain errors

use casekit_domain::error::Error;

#[test]
fn test_fixture_error_message() {
    let err = Error::fixture("duplicate test case id: HTC001");

    assert_eq!(err.to_string(), "Fixture error: duplicate test case id: HTC001");
}

#[test]
fn test_config_error_message() {
    let err = Error::config("Server port cannot be 0");

    assert_eq!(err.to_string(), "Configuration error: Server port cannot be 0");
}

#[test]
fn test_io_error_keeps_source() {
    let err = Error::Io {
        message: "Failed to read fixture file history_cases.json".to_string(),
        source: Some(Box::new(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ))),
    };

    assert_eq!(
        err.to_string(),
        "I/O error: Failed to read fixture file history_cases.json"
    );
    let source = std::error::Error::source(&err).expect("source should be kept");
    assert_eq!(source.to_string(), "denied");
}

//! Fixture source tests

use std::borrow::Cow;
use std::path::PathBuf;

use casekit_infrastructure::config::FixturesConfig;
use casekit_infrastructure::fixtures::{FixtureSource, FixtureTable};
use tempfile::TempDir;

#[test]
fn test_source_from_config() {
    assert_eq!(
        FixtureSource::from_config(&FixturesConfig::default()),
        FixtureSource::Embedded
    );

    let config = FixturesConfig {
        dir: Some(PathBuf::from("/srv/fixtures")),
    };
    assert_eq!(
        FixtureSource::from_config(&config),
        FixtureSource::Directory(PathBuf::from("/srv/fixtures"))
    );
}

#[test]
fn test_every_embedded_table_is_json() {
    for table in FixtureTable::ALL {
        let parsed: serde_json::Value = serde_json::from_str(table.embedded())
            .unwrap_or_else(|e| panic!("{} is not JSON: {e}", table.file_name()));
        assert!(!parsed.is_null());
    }
}

#[test]
fn test_directory_without_file_falls_back_to_embedded() {
    let dir = TempDir::new().expect("temp dir");
    let source = FixtureSource::Directory(dir.path().to_path_buf());

    let text = source.read(FixtureTable::HistoryCases).expect("table reads");

    assert!(matches!(text, Cow::Borrowed(_)));
    assert_eq!(text, FixtureTable::HistoryCases.embedded());
}

#[test]
fn test_directory_file_replaces_embedded() {
    let dir = TempDir::new().expect("temp dir");
    let body = r#"[{"value":"team","label":"Team library"}]"#;
    std::fs::write(dir.path().join("case_library_options.json"), body).expect("write table");
    let source = FixtureSource::Directory(dir.path().to_path_buf());

    let text = source
        .read(FixtureTable::CaseLibraryOptions)
        .expect("table reads");

    assert_eq!(text, body);
}

#[test]
fn test_decode_error_names_table() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("param_schemas.json"), "{not json").expect("write table");
    let source = FixtureSource::Directory(dir.path().to_path_buf());

    let err = source
        .decode::<serde_json::Value>(FixtureTable::ParamSchemas)
        .expect_err("broken table");

    assert!(err.to_string().contains("param_schemas.json"));
}

#[test]
fn test_describe() {
    assert_eq!(FixtureSource::Embedded.describe(), "embedded");
    assert_eq!(
        FixtureSource::Directory(PathBuf::from("/srv/fixtures")).describe(),
        "/srv/fixtures"
    );
}

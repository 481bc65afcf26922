//! Fixture table sources

use std::borrow::Cow;
use std::path::PathBuf;

use casekit_domain::error::Result;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::FixturesConfig;
use crate::constants::{
    CASE_LIBRARY_OPTIONS_FILE, COMPONENT_DEFAULT_PARAMS_FILE, HISTORY_CASES_FILE,
    PARAM_SCHEMAS_FILE, PRESET_COMPONENTS_FILE, PRESET_STEPS_FILE,
};
use crate::error_ext::ErrorContext;

/// The JSON tables making up the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureTable {
    /// Case-library selector entries
    CaseLibraryOptions,
    /// Historical test cases
    HistoryCases,
    /// Preset step templates
    PresetSteps,
    /// Component palette
    PresetComponents,
    /// Per-type default params
    ComponentDefaultParams,
    /// Per-type param schemas
    ParamSchemas,
}

impl FixtureTable {
    /// Every table, in load order
    pub const ALL: [FixtureTable; 6] = [
        FixtureTable::CaseLibraryOptions,
        FixtureTable::HistoryCases,
        FixtureTable::PresetSteps,
        FixtureTable::PresetComponents,
        FixtureTable::ComponentDefaultParams,
        FixtureTable::ParamSchemas,
    ];

    /// File name of the table inside a fixture directory
    pub fn file_name(self) -> &'static str {
        match self {
            FixtureTable::CaseLibraryOptions => CASE_LIBRARY_OPTIONS_FILE,
            FixtureTable::HistoryCases => HISTORY_CASES_FILE,
            FixtureTable::PresetSteps => PRESET_STEPS_FILE,
            FixtureTable::PresetComponents => PRESET_COMPONENTS_FILE,
            FixtureTable::ComponentDefaultParams => COMPONENT_DEFAULT_PARAMS_FILE,
            FixtureTable::ParamSchemas => PARAM_SCHEMAS_FILE,
        }
    }

    /// Table contents compiled into the binary
    pub fn embedded(self) -> &'static str {
        match self {
            FixtureTable::CaseLibraryOptions => {
                include_str!("../../fixtures/case_library_options.json")
            }
            FixtureTable::HistoryCases => include_str!("../../fixtures/history_cases.json"),
            FixtureTable::PresetSteps => include_str!("../../fixtures/preset_steps.json"),
            FixtureTable::PresetComponents => {
                include_str!("../../fixtures/preset_components.json")
            }
            FixtureTable::ComponentDefaultParams => {
                include_str!("../../fixtures/component_default_params.json")
            }
            FixtureTable::ParamSchemas => include_str!("../../fixtures/param_schemas.json"),
        }
    }
}

/// Where fixture tables are read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FixtureSource {
    /// Tables compiled into the binary
    #[default]
    Embedded,
    /// A directory overriding the tables it contains
    Directory(PathBuf),
}

impl FixtureSource {
    /// Pick the source named by the configuration
    pub fn from_config(config: &FixturesConfig) -> Self {
        match &config.dir {
            Some(dir) => FixtureSource::Directory(dir.clone()),
            None => FixtureSource::Embedded,
        }
    }

    /// Short description for start-up logs
    pub fn describe(&self) -> String {
        match self {
            FixtureSource::Embedded => "embedded".to_string(),
            FixtureSource::Directory(dir) => dir.display().to_string(),
        }
    }

    /// Raw JSON text of a table
    pub fn read(&self, table: FixtureTable) -> Result<Cow<'static, str>> {
        let FixtureSource::Directory(dir) = self else {
            return Ok(Cow::Borrowed(table.embedded()));
        };

        let path = dir.join(table.file_name());
        if !path.is_file() {
            debug!(table = table.file_name(), "No override file, using embedded table");
            return Ok(Cow::Borrowed(table.embedded()));
        }

        debug!(path = %path.display(), "Reading fixture override");
        let text = std::fs::read_to_string(&path)
            .io_context(format!("Failed to read fixture file {}", path.display()))?;
        Ok(Cow::Owned(text))
    }

    /// Read and decode a table
    pub fn decode<T: DeserializeOwned>(&self, table: FixtureTable) -> Result<T> {
        let text = self.read(table)?;
        serde_json::from_str(&text)
            .with_fixture_context(|| format!("Invalid fixture table {}", table.file_name()))
    }
}

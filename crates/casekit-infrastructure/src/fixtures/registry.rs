//! In-memory fixture registry

use std::sync::Arc;

use casekit_domain::error::Result;
use casekit_domain::ports::FixtureCatalog;
use casekit_domain::value_objects::{CaseLibraryOption, ParamSchemas, PresetData, TestCase};
use tracing::info;

use super::source::{FixtureSource, FixtureTable};
use super::validate::validate_registry;
use crate::config::FixturesConfig;

/// Immutable store of every fixture table
#[derive(Debug, Clone)]
pub struct FixtureRegistry {
    case_library_options: Vec<CaseLibraryOption>,
    history_cases: Vec<TestCase>,
    preset_data: PresetData,
    param_schemas: ParamSchemas,
}

impl FixtureRegistry {
    /// Load and validate all tables from `source`
    pub fn load(source: &FixtureSource) -> Result<Self> {
        let registry = Self {
            case_library_options: source.decode(FixtureTable::CaseLibraryOptions)?,
            history_cases: source.decode(FixtureTable::HistoryCases)?,
            preset_data: PresetData {
                steps: source.decode(FixtureTable::PresetSteps)?,
                components: source.decode(FixtureTable::PresetComponents)?,
                component_default_params: source.decode(FixtureTable::ComponentDefaultParams)?,
            },
            param_schemas: source.decode(FixtureTable::ParamSchemas)?,
        };
        validate_registry(&registry)?;

        info!(
            source = %source.describe(),
            history_cases = registry.history_cases.len(),
            preset_steps = registry.preset_data.steps.len(),
            components = registry.preset_data.components.len(),
            param_schemas = registry.param_schemas.len(),
            "Fixture registry loaded"
        );
        Ok(registry)
    }

    /// Load the tables compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::load(&FixtureSource::Embedded)
    }

    /// Load from the source named by the configuration
    pub fn from_config(config: &FixturesConfig) -> Result<Self> {
        Self::load(&FixtureSource::from_config(config))
    }

    /// Share the registry behind the catalog port
    pub fn into_shared(self) -> Arc<dyn FixtureCatalog> {
        Arc::new(self)
    }
}

impl FixtureCatalog for FixtureRegistry {
    fn case_library_options(&self) -> &[CaseLibraryOption] {
        &self.case_library_options
    }

    fn history_cases(&self) -> &[TestCase] {
        &self.history_cases
    }

    fn preset_data(&self) -> &PresetData {
        &self.preset_data
    }

    fn param_schemas(&self) -> &ParamSchemas {
        &self.param_schemas
    }
}

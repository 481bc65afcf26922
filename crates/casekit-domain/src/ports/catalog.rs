//! Read-only fixture catalog port

use crate::value_objects::{CaseLibraryOption, ParamSchemas, PresetData, SearchQuery, TestCase};

/// Read-only access to the fixture tables.
///
/// Implementations are built once at start-up and shared across request
/// handlers; none of the operations can fail.
pub trait FixtureCatalog: Send + Sync {
    /// Case-library selector entries
    fn case_library_options(&self) -> &[CaseLibraryOption];

    /// Every historical test case, in catalog order
    fn history_cases(&self) -> &[TestCase];

    /// Preset steps, the component palette and per-type default params
    fn preset_data(&self) -> &PresetData;

    /// Parameter schemas keyed by component type
    fn param_schemas(&self) -> &ParamSchemas;

    /// Historical cases selected by `query`
    fn search_history_cases(&self, query: &SearchQuery) -> Vec<TestCase> {
        query.apply(self.history_cases())
    }
}

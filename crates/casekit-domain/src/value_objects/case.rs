//! Case libraries and historical test cases

use serde::{Deserialize, Serialize};

/// Open parameter map of a component instance.
///
/// The field set varies per component type and is not a closed schema, so
/// values stay loosely typed JSON.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// One entry of the case-library selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseLibraryOption {
    /// Machine value sent back in search requests (`all`, `archived`)
    pub value: String,
    /// Human readable label
    pub label: String,
}

/// A historical test case that can be copied into a new case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    /// Case identifier (e.g. `HTC001`)
    pub id: String,
    /// Case title; the history search matches against it
    pub name: String,
    /// Setup sections
    pub preconditions: Vec<Section>,
    /// Execution sections
    pub steps: Vec<Section>,
    /// Verification sections
    pub expected_results: Vec<Section>,
}

/// A named, collapsible group of components inside a test case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section identifier
    pub id: String,
    /// Section title
    pub name: String,
    /// Whether the editor shows the section expanded
    #[serde(default)]
    pub expanded: bool,
    /// Components executed in order
    #[serde(default)]
    pub components: Vec<ComponentInstance>,
}

/// A configured automation component.
///
/// `component_type` is kept as a raw tag: preset steps use tags outside the
/// component registry and those must round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInstance {
    /// Instance identifier; preset templates carry none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Component tag
    #[serde(rename = "type")]
    pub component_type: String,
    /// Display name
    pub name: String,
    /// Component parameters
    #[serde(default)]
    pub params: Params,
}

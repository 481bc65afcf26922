//! Parameter schemas

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::component::ComponentType;

/// Editor widget used for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Single line text input
    Input,
    /// Editable drop-down
    Combo,
    /// Multi-line text
    Textarea,
    /// `name=value;...` variable editor
    VariableList,
    /// Request template picker
    TemplateSelect,
    /// Nested request/response tree editor
    JsonTree,
}

/// A choice offered by a combo or template picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldOption {
    /// Plain value, shown as is
    Plain(String),
    /// Value with a display label
    Labeled {
        /// Value stored in params
        value: String,
        /// Display label
        label: String,
    },
}

/// One editable field of a component's parameter form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Params key the field edits
    pub name: String,
    /// Form label
    pub label: String,
    /// Editor widget
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Whether the form requires a value
    #[serde(default)]
    pub required: bool,
    /// Choices for combo and template pickers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
    /// Placeholder hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Initial value for tree editors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,
    /// Marks a json-tree that edits the request payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_request: Option<bool>,
    /// Marks a json-tree that edits response assertions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_response: Option<bool>,
}

/// Ordered field lists keyed by component type
pub type ParamSchemas = BTreeMap<ComponentType, Vec<FieldDescriptor>>;

//! Component registry types and preset templates

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::case::{ComponentInstance, Params};
use crate::constants::COMPONENT_TYPE_COUNT;

/// The automation component types known to the registry.
///
/// Declaration order is the catalog order: maps keyed by component type
/// serialize in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentType {
    /// Calling/called number assignment
    Phone,
    /// Variable definitions
    Variable,
    /// Save created user info into variables
    SaveUserInfo,
    /// Move a subscriber's effective time forward
    MoveForwardEfftime,
    /// Wait for a number of seconds
    DelayTime,
    /// Database query
    Database,
    /// SOAP request
    Api,
    /// Step comment
    Comment,
    /// REST request
    Restful,
    /// Remote shell command
    Shell,
    /// Scheduled task trigger
    Task,
}

impl ComponentType {
    /// Every component type in catalog order
    pub const ALL: [ComponentType; COMPONENT_TYPE_COUNT] = [
        ComponentType::Phone,
        ComponentType::Variable,
        ComponentType::SaveUserInfo,
        ComponentType::MoveForwardEfftime,
        ComponentType::DelayTime,
        ComponentType::Database,
        ComponentType::Api,
        ComponentType::Comment,
        ComponentType::Restful,
        ComponentType::Shell,
        ComponentType::Task,
    ];

    /// Wire tag of the component type
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::Phone => "phone",
            ComponentType::Variable => "variable",
            ComponentType::SaveUserInfo => "saveUserInfo",
            ComponentType::MoveForwardEfftime => "moveForwardEfftime",
            ComponentType::DelayTime => "delayTime",
            ComponentType::Database => "database",
            ComponentType::Api => "api",
            ComponentType::Comment => "comment",
            ComponentType::Restful => "restful",
            ComponentType::Shell => "shell",
            ComponentType::Task => "task",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Palette entry describing one component type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentTypeDescriptor {
    /// Palette identifier (e.g. `comp_phone`)
    pub id: String,
    /// Component type this entry inserts
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    /// Display name
    pub name: String,
    /// Name of the executor behind the component
    pub alias: String,
    /// Icon key
    pub icon: String,
    /// Short description
    pub description: String,
}

/// A reusable step template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetStep {
    /// Template identifier
    pub id: String,
    /// Step title
    pub name: String,
    /// What the step does
    pub description: String,
    /// Component templates, without instance ids
    pub components: Vec<ComponentInstance>,
}

/// Default parameter values for each component type
pub type ComponentDefaultParams = BTreeMap<ComponentType, Params>;

/// Everything the editor needs to insert presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetData {
    /// Step templates
    pub steps: Vec<PresetStep>,
    /// Component palette
    pub components: Vec<ComponentTypeDescriptor>,
    /// Default params applied when a component is inserted
    pub component_default_params: ComponentDefaultParams,
}

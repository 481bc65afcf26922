//! Value objects served by the fixture catalog
//!
//! Every type here is immutable once loaded and serializes to the exact JSON
//! shape the authoring front-end consumes (camelCase keys).

mod case;
mod component;
mod schema;
mod search;

pub use case::{CaseLibraryOption, ComponentInstance, Params, Section, TestCase};
pub use component::{
    ComponentDefaultParams, ComponentType, ComponentTypeDescriptor, PresetData, PresetStep,
};
pub use schema::{FieldDescriptor, FieldKind, FieldOption, ParamSchemas};
pub use search::SearchQuery;

//! # casekit domain
//!
//! Entities and contracts for the test-case authoring fixture service.
//!
//! The domain layer knows nothing about HTTP or configuration. It defines the
//! shapes served to the authoring front-end (case libraries, historical test
//! cases, preset steps and components, parameter schemas), the search
//! semantics applied to historical cases, and the [`ports::FixtureCatalog`]
//! port that the infrastructure layer implements.
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`value_objects::TestCase`] | Historical test case with its three section lists |
//! | [`value_objects::ComponentType`] | The 11 registered automation component tags |
//! | [`value_objects::FieldDescriptor`] | One editable field of a component's param schema |
//! | [`value_objects::SearchQuery`] | Filters accepted by the history search |
//! | [`ports::FixtureCatalog`] | Read-only access to every fixture table |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};

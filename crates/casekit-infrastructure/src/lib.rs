//! # casekit infrastructure
//!
//! Cross-cutting technical concerns for the fixture service:
//!
//! - [`config`]: layered configuration (defaults, TOML file, environment) via figment
//! - [`logging`]: tracing subscriber setup with optional JSON and file output
//! - [`fixtures`]: the immutable fixture registry implementing
//!   [`casekit_domain::ports::FixtureCatalog`]
//! - [`error_ext`]: context helpers that convert foreign errors into domain errors

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod fixtures;
pub mod logging;

pub use fixtures::{FixtureRegistry, FixtureSource};

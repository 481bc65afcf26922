//! Fixture registry
//!
//! The registry holds every table served by the API. It is loaded once at
//! start-up from a [`FixtureSource`], checked against the catalog
//! invariants, and then shared read-only behind
//! [`casekit_domain::ports::FixtureCatalog`].

mod registry;
mod source;
mod validate;

pub use registry::FixtureRegistry;
pub use source::{FixtureSource, FixtureTable};

//! Configuration
//!
//! Typed configuration sections and the figment-based [`ConfigLoader`].

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, FixturesConfig, LoggingConfig, ServerConfig};

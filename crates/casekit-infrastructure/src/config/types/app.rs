//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{FixturesConfig, LoggingConfig, ServerConfig};

/// Root configuration document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Logging settings
    pub logging: LoggingConfig,
    /// Fixture table settings
    pub fixtures: FixturesConfig,
}

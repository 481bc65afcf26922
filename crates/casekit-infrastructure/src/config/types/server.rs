//! HTTP server configuration types

use crate::constants::{DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT};
use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Add permissive CORS headers to every response
    pub cors_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            cors_enabled: true,
        }
    }
}

//! Server Initialization
//!
//! Loads configuration, installs logging, builds the fixture registry and
//! hands it to the HTTP transport.

use std::path::Path;

use casekit_infrastructure::config::{AppConfig, ConfigLoader, ServerConfig};
use casekit_infrastructure::fixtures::FixtureRegistry;
use casekit_infrastructure::logging::init_logging;
use tracing::info;

use crate::constants::ENDPOINTS;
use crate::transport::http::{HttpTransport, HttpTransportConfig};

/// Command-line values that take precedence over loaded configuration
#[derive(Debug, Clone, Default)]
pub struct ServerOverrides {
    /// Bind address
    pub host: Option<String>,
    /// Listen port
    pub port: Option<u16>,
}

impl ServerOverrides {
    /// Apply the overrides that are set
    pub fn apply(self, server: &mut ServerConfig) {
        if let Some(host) = self.host {
            server.host = host;
        }
        if let Some(port) = self.port {
            server.port = port;
        }
    }
}

/// Run the fixture server
///
/// Start-up order: configuration, logging, fixture registry, HTTP transport.
/// Any failure before the transport is listening aborts start-up.
pub async fn run(config_path: Option<&Path>, overrides: ServerOverrides) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    overrides.apply(&mut config.server);
    init_logging(&config.logging)?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        "Starting casekit fixture server"
    );

    let registry = FixtureRegistry::from_config(&config.fixtures)?;
    log_endpoints();

    HttpTransport::new(
        HttpTransportConfig::from(&config.server),
        registry.into_shared(),
    )
    .start()
    .await
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> casekit_domain::error::Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}

fn log_endpoints() {
    for (method, path, description) in ENDPOINTS {
        info!(method = *method, path = *path, "Serving {}", description);
    }
}

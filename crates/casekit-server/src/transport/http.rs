//! HTTP Transport
//!
//! Serves the fixture API with Rocket. A CORS fairing opens every response to
//! any origin, and a catch-all `OPTIONS` route answers browser preflights.

use std::net::SocketAddr;
use std::sync::Arc;

use casekit_domain::ports::FixtureCatalog;
use casekit_infrastructure::config::ServerConfig;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::{Build, Request, Response, Rocket, options, routes};
use tracing::info;

use crate::constants::ROCKET_LOG_LEVEL;
use crate::handlers::api_routes;

/// HTTP transport configuration
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Enable CORS for browser access
    pub enable_cors: bool,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self::from(&ServerConfig::default())
    }
}

impl From<&ServerConfig> for HttpTransportConfig {
    fn from(server: &ServerConfig) -> Self {
        Self {
            host: server.host.clone(),
            port: server.port,
            enable_cors: server.cors_enabled,
        }
    }
}

impl HttpTransportConfig {
    /// Create config for localhost with specified port
    pub fn localhost(port: u16) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port,
            enable_cors: true,
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], self.port)))
    }
}

/// State shared by all request handlers
#[derive(Clone)]
pub struct ApiState {
    /// Read-only fixture tables
    pub catalog: Arc<dyn FixtureCatalog>,
}

/// HTTP transport server
pub struct HttpTransport {
    config: HttpTransportConfig,
    state: ApiState,
}

impl HttpTransport {
    /// Create a new HTTP transport over a loaded catalog
    pub fn new(config: HttpTransportConfig, catalog: Arc<dyn FixtureCatalog>) -> Self {
        Self {
            config,
            state: ApiState { catalog },
        }
    }

    /// Build the Rocket application
    pub fn rocket(&self) -> Rocket<Build> {
        let mut rocket = rocket::build()
            .manage(self.state.clone())
            .mount("/", api_routes());

        if self.config.enable_cors {
            rocket = rocket.attach(Cors).mount("/", routes![preflight]);
        }

        rocket
    }

    /// Start the HTTP transport server and serve until shutdown
    pub async fn start(self) -> anyhow::Result<()> {
        let addr = self.config.socket_addr();
        info!(cors = self.config.enable_cors, "HTTP transport listening on {}", addr);

        let figment = rocket::Config::figment()
            .merge(("address", self.config.host.clone()))
            .merge(("port", self.config.port))
            .merge(("log_level", ROCKET_LOG_LEVEL));

        // Display marks the Rocket error as handled
        self.rocket()
            .configure(figment)
            .launch()
            .await
            .map_err(|e| anyhow::anyhow!("HTTP server failed: {e}"))?;

        info!("HTTP transport stopped");
        Ok(())
    }
}

/// CORS Fairing for Rocket
///
/// Adds CORS headers to all responses to allow browser access.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

/// Answer CORS preflight requests for any path
#[options("/<_..>")]
pub fn preflight() -> Status {
    Status::NoContent
}

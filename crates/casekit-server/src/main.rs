//! casekit - HTTP fixture API for the test-case authoring tool
//!
//! ```text
//! casekit                      # defaults: 0.0.0.0:5000, embedded fixtures
//! casekit --config casekit.toml
//! casekit --host 127.0.0.1 --port 8080
//! ```

use casekit_server::{ServerOverrides, run};
use clap::Parser;

/// Command line interface for the casekit fixture server
#[derive(Parser, Debug)]
#[command(name = "casekit")]
#[command(about = "casekit - Fixture API for the test-case authoring tool")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Address to bind (overrides `server.host`)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides `server.port`)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let overrides = ServerOverrides {
        host: cli.host,
        port: cli.port,
    };
    run(cli.config.as_deref(), overrides).await
}

//! # casekit server
//!
//! HTTP fixture API backing the test-case authoring tool.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/api/case-library-options` | Case-library selector entries |
//! | POST | `/api/search-history-cases` | Historical cases filtered by name |
//! | GET | `/api/preset-data` | Preset steps, component palette, default params |
//! | GET | `/api/param-schemas` | Parameter form schemas per component type |
//! | GET | `/health` | Liveness probe |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use casekit_server::{ServerOverrides, run};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Default config lookup (working directory, XDG paths, environment)
//!     run(None, ServerOverrides::default()).await
//! }
//! ```

pub mod constants;
pub mod handlers;
pub mod init;
pub mod models;
pub mod transport;

pub use init::{ServerOverrides, run};
pub use transport::http::{ApiState, HttpTransport, HttpTransportConfig};

//! Configuration types module

pub mod app;
pub mod fixtures;
pub mod logging;
pub mod server;

// Re-export main types
pub use app::AppConfig;
pub use fixtures::FixturesConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;

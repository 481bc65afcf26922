//! Server-specific constants

/// `status` reported by the health endpoint
pub const HEALTH_STATUS_OK: &str = "ok";

/// `message` reported by the health endpoint
pub const HEALTH_MESSAGE: &str = "casekit API server is running";

/// Rocket's own log level; request logging goes through tracing
pub const ROCKET_LOG_LEVEL: &str = "critical";

/// Served endpoints, logged at start-up as (method, path, description)
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/api/case-library-options", "case library options"),
    ("POST", "/api/search-history-cases", "search historical test cases"),
    ("GET", "/api/preset-data", "preset steps and components"),
    ("GET", "/api/param-schemas", "component param schemas"),
    ("GET", "/health", "health check"),
];

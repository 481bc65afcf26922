//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "casekit.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "casekit";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "CASEKIT";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default bind address (all interfaces)
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 5000;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_VAR: &str = "CASEKIT_LOG";

/// File stem used when the configured log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "casekit";

// ============================================================================
// FIXTURE CONSTANTS
// ============================================================================

/// Case-library selector table
pub const CASE_LIBRARY_OPTIONS_FILE: &str = "case_library_options.json";

/// Historical test case table
pub const HISTORY_CASES_FILE: &str = "history_cases.json";

/// Preset step table
pub const PRESET_STEPS_FILE: &str = "preset_steps.json";

/// Component palette table
pub const PRESET_COMPONENTS_FILE: &str = "preset_components.json";

/// Per-type default params table
pub const COMPONENT_DEFAULT_PARAMS_FILE: &str = "component_default_params.json";

/// Per-type param schema table
pub const PARAM_SCHEMAS_FILE: &str = "param_schemas.json";

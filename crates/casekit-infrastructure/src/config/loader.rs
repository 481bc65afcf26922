//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values using Figment.

use crate::config::{AppConfig, FixturesConfig, LoggingConfig, ServerConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use casekit_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `CASEKIT_SERVER__PORT`)
    pub fn load(&self) -> Result<AppConfig> {
        let config: AppConfig = self
            .figment()
            .extract()
            .config_context("Failed to extract configuration")?;
        validate_app_config(&config)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    fn figment(&self) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            let found = config_path.exists();
            if found {
                figment = figment.merge(Toml::file(config_path));
            }
            log_config_loaded(config_path, found);
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore separates nested keys so field names may keep theirs
        figment.merge(
            Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split(CONFIG_ENV_SEPARATOR),
        )
    }

    /// Find the first default configuration file that exists
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{}", DEFAULT_CONFIG_DIR))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(&config.server)?;
    validate_logging_config(&config.logging)?;
    validate_fixtures_config(&config.fixtures)?;
    Ok(())
}

fn validate_server_config(server: &ServerConfig) -> Result<()> {
    if server.port == 0 {
        return Err(Error::config("Server port cannot be 0"));
    }
    if server.host.trim().is_empty() {
        return Err(Error::config("Server host cannot be empty"));
    }
    Ok(())
}

fn validate_logging_config(logging: &LoggingConfig) -> Result<()> {
    parse_log_level(&logging.level).map(|_| ())
}

fn validate_fixtures_config(fixtures: &FixturesConfig) -> Result<()> {
    match &fixtures.dir {
        Some(dir) if !dir.is_dir() => Err(Error::config(format!(
            "Fixture directory does not exist: {}",
            dir.display()
        ))),
        _ => Ok(()),
    }
}

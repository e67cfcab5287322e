//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote event API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_cohort")]
    pub cohort: String,

    #[serde(default = "default_resource")]
    pub resource: String,

    #[serde(default = "default_guests_path")]
    pub guests_path: String,

    #[serde(default = "default_rsvps_path")]
    pub rsvps_path: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://fsa-crud-2aa9294fe819.herokuapp.com/api".to_string()
}

fn default_cohort() -> String {
    "2507-EduardoMaldonado".to_string()
}

fn default_resource() -> String {
    "/events".to_string()
}

fn default_guests_path() -> String {
    "/guests".to_string()
}

fn default_rsvps_path() -> String {
    "/rsvps".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cohort: default_cohort(),
            resource: default_resource(),
            guests_path: default_guests_path(),
            rsvps_path: default_rsvps_path(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl GatewayConfig {
    /// Gateway config pointing at an arbitrary base URL with default paths
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// Local page server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8084
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from an explicit path, or from default locations or environment
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("party-planner").join("config.toml")),
            Some(PathBuf::from("/etc/party-planner/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (the environment in production)
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Gateway overrides
        if let Some(url) = lookup("PARTY_PLANNER_BASE_URL") {
            self.gateway.base_url = url;
        }
        if let Some(cohort) = lookup("PARTY_PLANNER_COHORT") {
            self.gateway.cohort = cohort;
        }
        if let Some(resource) = lookup("PARTY_PLANNER_RESOURCE") {
            self.gateway.resource = resource;
        }
        if let Some(timeout) = lookup("PARTY_PLANNER_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.gateway.request_timeout_secs = t;
            }
        }

        // Server overrides
        if let Some(host) = lookup("PARTY_PLANNER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PARTY_PLANNER_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("PARTY_PLANNER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("PARTY_PLANNER_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Party Planner Configuration
#
# Environment variables override these settings:
# - PARTY_PLANNER_BASE_URL
# - PARTY_PLANNER_COHORT
# - PARTY_PLANNER_RESOURCE
# - PARTY_PLANNER_TIMEOUT_SECS
# - PARTY_PLANNER_HOST
# - PARTY_PLANNER_PORT
# - PARTY_PLANNER_LOG_LEVEL
# - PARTY_PLANNER_LOG_FORMAT

[gateway]
# Remote event API base URL
base_url = "https://fsa-crud-2aa9294fe819.herokuapp.com/api"

# Cohort segment appended to the base URL
cohort = "2507-EduardoMaldonado"

# Party collection path under the cohort
resource = "/events"

# Read-only auxiliary collections
guests_path = "/guests"
rsvps_path = "/rsvps"

# Request timeout in seconds
request_timeout_secs = 30

[server]
# Address the party page is served on
host = "127.0.0.1"
port = 8084

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

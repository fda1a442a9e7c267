//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::render::PageSettings;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
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
    8050
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

/// Dashboard content configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_heading")]
    pub heading: String,

    /// Brand preselected in the dropdown
    #[serde(default)]
    pub default_brand: Option<String>,

    /// CSV export to load instead of the built-in sample table
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

fn default_title() -> String {
    PageSettings::default().title
}

fn default_heading() -> String {
    PageSettings::default().heading
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            heading: default_heading(),
            default_brand: None,
            data_file: None,
        }
    }
}

impl DashboardConfig {
    pub fn page_settings(&self) -> PageSettings {
        PageSettings {
            title: self.title.clone(),
            heading: self.heading.clone(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
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

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
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

    /// Config file locations searched when none is given explicitly
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("pulseboard").join("config.toml")),
            Some(PathBuf::from("./pulseboard.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Resolve configuration without logging
    ///
    /// An explicit path must load. Otherwise the first existing default
    /// location is tried, falling back to environment-only config if it fails
    /// to load. The returned [`ConfigOrigin`] can be logged once a subscriber
    /// is installed.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, ConfigOrigin), ConfigError> {
        if let Some(path) = explicit {
            let config = Self::load_with_env(path)?;
            return Ok((config, ConfigOrigin::File(path.to_path_buf())));
        }

        Ok(Self::resolve_from(&Self::default_paths()))
    }

    fn resolve_from(candidates: &[PathBuf]) -> (Self, ConfigOrigin) {
        match candidates.iter().find(|p| p.exists()) {
            Some(path) => match Self::load_with_env(path) {
                Ok(config) => (config, ConfigOrigin::File(path.clone())),
                Err(error) => (Self::from_env(), ConfigOrigin::Fallback { error }),
            },
            None => (Self::from_env(), ConfigOrigin::Environment),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = lookup("PULSEBOARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PULSEBOARD_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid PULSEBOARD_PORT: {}", port),
            }
        }

        // Dashboard overrides
        if let Some(brand) = lookup("PULSEBOARD_DEFAULT_BRAND") {
            self.dashboard.default_brand = Some(brand);
        }
        if let Some(file) = lookup("PULSEBOARD_DATA_FILE") {
            self.dashboard.data_file = Some(PathBuf::from(file));
        }

        // Logging overrides
        if let Some(level) = lookup("PULSEBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("PULSEBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Where a resolved configuration came from
#[derive(Debug)]
pub enum ConfigOrigin {
    /// Loaded from this file (plus env overrides)
    File(PathBuf),
    /// A default config file existed but failed to load
    Fallback { error: ConfigError },
    /// No config file; defaults plus env overrides
    Environment,
}

impl ConfigOrigin {
    pub fn log(&self) {
        match self {
            ConfigOrigin::File(path) => tracing::info!("Loaded config from {:?}", path),
            ConfigOrigin::Fallback { error } => {
                tracing::warn!("{}; using default config with environment overrides", error)
            }
            ConfigOrigin::Environment => {
                tracing::info!("Using default config with environment overrides")
            }
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
    r#"# Pulseboard Configuration
#
# Environment variables override these settings:
# - PULSEBOARD_HOST
# - PULSEBOARD_PORT
# - PULSEBOARD_DEFAULT_BRAND
# - PULSEBOARD_DATA_FILE
# - PULSEBOARD_LOG_LEVEL
# - PULSEBOARD_LOG_FORMAT

[server]
# Address to serve the dashboard on
host = "127.0.0.1"
port = 8050

[dashboard]
# Browser tab title and page heading
title = "PhonePe Transaction Dashboard"
heading = "PhonePe Transactions - Aggregated User Data"

# Brand preselected in the dropdown
default_brand = "PhonePe"

# CSV export with headers State,Year,Quarter,Brand,Transaction_count,Transaction_amount
# (the built-in sample table is used when unset)
# data_file = "aggregated_user.csv"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "127.0.0.1:8050");
        assert_eq!(config.dashboard.title, "PhonePe Transaction Dashboard");
        assert_eq!(config.dashboard.default_brand, None);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8050);
        assert_eq!(config.dashboard.default_brand.as_deref(), Some("PhonePe"));
        assert_eq!(config.dashboard.data_file, None);
        assert_eq!(config.dashboard.page_settings(), PageSettings::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            Config::parse("[server\nport = "),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PULSEBOARD_HOST", "0.0.0.0"),
            ("PULSEBOARD_PORT", "not-a-port"),
            ("PULSEBOARD_DEFAULT_BRAND", "Paytm"),
            ("PULSEBOARD_DATA_FILE", "data.csv"),
            ("PULSEBOARD_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8050);
        assert_eq!(config.dashboard.default_brand.as_deref(), Some("Paytm"));
        assert_eq!(config.dashboard.data_file, Some(PathBuf::from("data.csv")));
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard]\ndefault_brand = \"Google Pay\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.dashboard.default_brand.as_deref(), Some("Google Pay"));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();

        let (config, origin) = Config::resolve(Some(file.path())).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(matches!(origin, ConfigOrigin::File(p) if p == file.path()));
    }

    #[test]
    fn test_resolve_explicit_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::resolve(Some(&missing)),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_resolve_broken_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("pulseboard.toml");
        std::fs::write(&broken, "[server\n").unwrap();

        let (config, origin) = Config::resolve_from(&[dir.path().join("absent.toml"), broken]);
        assert_eq!(config.dashboard, DashboardConfig::default());
        assert!(matches!(
            origin,
            ConfigOrigin::Fallback {
                error: ConfigError::Parse { .. }
            }
        ));
    }

    #[test]
    fn test_resolve_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let (_, origin) = Config::resolve_from(&[dir.path().join("absent.toml")]);
        assert!(matches!(origin, ConfigOrigin::Environment));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}

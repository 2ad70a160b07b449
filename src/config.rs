//! Configuration management for README Forge
//!
//! This module provides unified configuration management with first-run
//! initialization, multi-source loading, and zero-config defaults.
//!
//! Precedence, lowest first:
//! 1. Built-in defaults
//! 2. Config file (explicit path, or the first one found in the search path)
//! 3. Environment variables (`README_FORGE_SERVICE_URL`, `README_FORGE_OUTPUT_DIR`)
//! 4. CLI arguments, applied by the caller

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::app::ClientConfig;
use crate::constants::{env, files, http, service};
use crate::errors::{ConfigError, ConfigResult};

/// Unified application configuration for TOML serialization
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Generation service location
    pub service: ServiceConfigToml,
    /// HTTP client settings
    pub client: ClientConfigToml,
    /// README export settings
    pub export: ExportConfigToml,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// TOML-friendly service configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceConfigToml {
    /// Base URL of the generation service
    pub base_url: String,
    /// Path of the generation endpoint
    pub endpoint_path: String,
}

impl Default for ServiceConfigToml {
    fn default() -> Self {
        Self {
            base_url: service::DEFAULT_BASE_URL.to_string(),
            endpoint_path: service::GENERATE_PATH.to_string(),
        }
    }
}

/// TOML-friendly client configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfigToml {
    /// Connect timeout, e.g. "30s"
    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,
    /// Whole-request timeout; unset waits as long as the service takes
    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<Duration>,
    /// TCP nodelay setting
    pub tcp_nodelay: bool,
    /// Connection pool idle timeout
    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub pool_idle_timeout: Option<Duration>,
}

impl Default for ClientConfigToml {
    fn default() -> Self {
        Self {
            connect_timeout: http::CONNECT_TIMEOUT,
            request_timeout: None,
            tcp_nodelay: true,
            pool_idle_timeout: Some(http::POOL_IDLE_TIMEOUT),
        }
    }
}

/// TOML-friendly export configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ExportConfigToml {
    /// Directory README.md is written to (unset = current directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Replace an existing README.md instead of writing `README (n).md`
    pub overwrite: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level for the application
    pub level: String,
    /// Log file for the interactive form, which owns the terminal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `config_file_override` must exist; otherwise the standard
    /// locations are searched and a missing file just means defaults.
    pub async fn load(config_file_override: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        let config_path = match config_file_override {
            Some(path) if path.exists() => Some(path),
            Some(path) => return Err(ConfigError::NotFound { path }),
            None => Self::find_config_file(),
        };

        if let Some(path) = config_path {
            debug!("Loading config from: {}", path.display());
            config = Self::load_from_file(&path).await?;
        }

        config.apply_overrides_from(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Apply environment-style overrides from `lookup`
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(env::SERVICE_URL).filter(|v| !v.trim().is_empty()) {
            debug!("Service URL overridden by {}", env::SERVICE_URL);
            self.service.base_url = url;
        }
        if let Some(dir) = lookup(env::OUTPUT_DIR).filter(|v| !v.trim().is_empty()) {
            debug!("Output directory overridden by {}", env::OUTPUT_DIR);
            self.export.output_dir = Some(PathBuf::from(dir));
        }
    }

    /// Check values that would otherwise only fail at request time
    pub fn validate(&self) -> ConfigResult<()> {
        let url = Url::parse(&self.service.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "service.base_url".to_string(),
            value: self.service.base_url.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "service.base_url".to_string(),
                value: self.service.base_url.clone(),
                reason: "Only http and https service URLs are supported".to_string(),
            });
        }

        if self.client.connect_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "client.connect_timeout".to_string(),
                value: "0s".to_string(),
                reason: "Connect timeout must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Runtime client configuration
    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig {
            service_url: self.service.base_url.clone(),
            endpoint_path: self.service.endpoint_path.clone(),
            request_timeout: self.client.request_timeout,
            connect_timeout: self.client.connect_timeout,
            tcp_nodelay: self.client.tcp_nodelay,
            pool_idle_timeout: self.client.pool_idle_timeout,
        }
    }

    /// Directory exported READMEs are written to
    pub fn output_dir(&self) -> PathBuf {
        self.export
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Initialize configuration on first run
    ///
    /// Creates a commented default config file in the user config directory.
    /// Returns the path and whether a new file was written.
    pub async fn initialize_first_run(force: bool) -> ConfigResult<(PathBuf, bool)> {
        let config_path = Self::get_default_config_path()?;

        if config_path.exists() && !force {
            return Ok((config_path, false));
        }

        info!("Creating default configuration file...");

        if let Some(parent) = config_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ConfigError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(&config_path, Self::generate_default_config_content())
            .await
            .map_err(|source| ConfigError::Io {
                path: config_path.clone(),
                source,
            })?;

        info!("Wrote default configuration to {}", config_path.display());
        Ok((config_path, true))
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Configuration search path, most specific first
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".").join(files::LOCAL_CONFIG_FILE)];
        if let Ok(user) = Self::get_default_config_path() {
            paths.push(user);
        }
        #[cfg(unix)]
        paths.push(
            PathBuf::from("/etc")
                .join(files::CONFIG_DIR_NAME)
                .join(files::CONFIG_FILE_NAME),
        );
        paths
    }

    fn find_config_file() -> Option<PathBuf> {
        let found = Self::search_paths().into_iter().find(|path| path.exists());
        match &found {
            Some(path) => debug!("Found config file: {}", path.display()),
            None => debug!("No config file found in standard locations"),
        }
        found
    }

    /// Get the default config file path for the current user
    pub fn get_default_config_path() -> ConfigResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir
            .join(files::CONFIG_DIR_NAME)
            .join(files::CONFIG_FILE_NAME))
    }

    async fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let config: AppConfig = toml::from_str(&content)?;

        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Generate default configuration content with comments
    pub fn generate_default_config_content() -> String {
        format!(
            r#"# README Forge Configuration
# You can customize any of these settings to suit your needs.

[service]
# Generation service base URL (overridden by {service_env})
base_url = "{base_url}"
endpoint_path = "{endpoint_path}"

[client]
connect_timeout = "{connect_timeout}"
# request_timeout = "2m"  # Unset waits for the service however long it takes
tcp_nodelay = true
pool_idle_timeout = "{pool_idle_timeout}"

[export]
# Directory README.md is written to (overridden by {output_env})
# output_dir = "/path/to/project"
overwrite = false  # When false an existing README.md is kept and "README (1).md" is written

[logging]
level = "warn"  # error, warn, info, debug, trace
# log_file = "/path/to/readme-forge.log"  # Used by the interactive form
"#,
            service_env = env::SERVICE_URL,
            base_url = service::DEFAULT_BASE_URL,
            endpoint_path = service::GENERATE_PATH,
            connect_timeout = format!("{}s", http::CONNECT_TIMEOUT.as_secs()),
            pool_idle_timeout = format!("{}s", http::POOL_IDLE_TIMEOUT.as_secs()),
            output_env = env::OUTPUT_DIR,
        )
    }
}

//! Configuration types for the must-read server.
//!
//! The process interface is a single positional argument, so everything else
//! comes from defaults, optionally overlaid by a YAML file named in
//! [`CONFIG_ENV_VAR`].

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::Path;

use crate::Error;

/// Environment variable naming an optional YAML configuration file.
pub const CONFIG_ENV_VAR: &str = "MUST_READ_CONFIG";

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Server settings
    pub server: ServerSettings,
}

impl ServerConfig {
    /// Load configuration from the file named in [`CONFIG_ENV_VAR`], falling
    /// back to defaults when the variable is unset.
    pub fn load() -> crate::Result<Self> {
        Self::load_from(std::env::var_os(CONFIG_ENV_VAR))
    }

    /// Like [`ServerConfig::load`], but a bad config file is not fatal: the
    /// defaults are returned together with the error so the caller can log it.
    pub fn load_or_default() -> (Self, Option<Error>) {
        Self::load_from_or_default(std::env::var_os(CONFIG_ENV_VAR))
    }

    /// Load configuration from an optional file path, falling back to defaults
    /// on any error.
    pub fn load_from_or_default(path: Option<OsString>) -> (Self, Option<Error>) {
        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load configuration from an optional file path.
    pub fn load_from(path: Option<OsString>) -> crate::Result<Self> {
        match path {
            Some(path) if !path.is_empty() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "cannot read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        let config: ServerConfig =
            serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> crate::Result<()> {
        if self.server.name.trim().is_empty() {
            return Err(Error::Config("server.name cannot be empty".to_string()));
        }

        Ok(())
    }
}

/// Server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Name reported to MCP clients
    pub name: String,
    /// Version reported to MCP clients
    pub version: String,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            name: "must_read".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
        }
    }
}

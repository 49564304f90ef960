use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_APPLICATION_NAME: &str = "parafarmaijaApp";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATABASE: &str = "parafarmaija.db";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },
}

/// Server configuration, loaded from an optional YAML file and overridden by CLI flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct AppConfig {
    /// Used as the prefix of the `X-<app>-alert` style response headers.
    pub application_name: String,
    pub port: u16,
    pub database: String,
    pub cors_origin: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            application_name: DEFAULT_APPLICATION_NAME.to_string(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
            cors_origin: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_overrides(
        mut self,
        port: Option<u16>,
        database: Option<String>,
        cors_origin: Option<String>,
    ) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(database) = database {
            self.database = database;
        }
        if cors_origin.is_some() {
            self.cors_origin = cors_origin;
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // The name ends up inside HTTP header names
        let name = self.application_name.as_str();
        if name.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "application_name",
                message: "must not be empty".to_string(),
            });
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ConfigError::InvalidValue {
                field: "application_name",
                message: format!("'{}' contains characters not allowed in a header name", name),
            });
        }
        Ok(())
    }
}

//! Configuration loading and management
//!
//! Configuration comes from an optional YAML file (path in
//! `ORDER_TRACKING_CONFIG`), then environment overrides, then validation.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Environment variable naming the YAML configuration file
pub const CONFIG_PATH_VAR: &str = "ORDER_TRACKING_CONFIG";

/// Which store implementation backs the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    InMemory,
    Postgres,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,

    #[validate(range(min = 1, message = "port must be non-zero"))]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Storage backend settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_storage"))]
pub struct StorageConfig {
    pub backend: StorageBackend,

    /// Required for the postgres backend
    pub database_url: Option<String>,

    /// Maximum number of connections in the pool
    #[validate(range(min = 1, max = 100))]
    pub max_connections: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::InMemory,
            database_url: None,
            max_connections: 10,
        }
    }
}

fn validate_storage(storage: &StorageConfig) -> Result<(), validator::ValidationError> {
    let has_url = storage
        .database_url
        .as_deref()
        .is_some_and(|url| !url.trim().is_empty());

    if storage.backend == StorageBackend::Postgres && !has_url {
        let mut err = validator::ValidationError::new("database_url_required");
        err.message = Some("the postgres backend requires storage.database_url".into());
        return Err(err);
    }
    Ok(())
}

/// Complete service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    #[validate(nested)]
    pub server: ServerConfig,

    #[validate(nested)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path, e))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load from the file named by `ORDER_TRACKING_CONFIG` (or defaults),
    /// apply environment overrides and validate
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.check()?;
        Ok(config)
    }

    /// Apply `ORDER_TRACKING_HOST`, `ORDER_TRACKING_PORT` and `DATABASE_URL`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("ORDER_TRACKING_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("ORDER_TRACKING_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| anyhow!("Invalid ORDER_TRACKING_PORT '{}': {}", port, e))?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.storage.database_url = Some(url);
        }
        Ok(())
    }

    /// Validate all sections
    pub fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|e| anyhow!("Invalid configuration: {}", e))
    }

    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

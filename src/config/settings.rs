//! Client settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main client configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// REST API endpoint configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Host serving the API, e.g. `http://localhost:8000`. Resource paths
    /// under `/api/...` are joined onto this.
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Uploaded-file resolution configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Public path prefix the server exposes uploads under.
    pub public_path: String,
    /// Path returned for records with no uploaded image.
    pub placeholder: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("hostel").required(false))
            .add_source(config::Environment::with_prefix("HOSTEL").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Build settings for a given API host, defaults elsewhere.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::ApiError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_seconds: 30,
            user_agent: format!("hostel-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            public_path: "storage".to_string(),
            placeholder: crate::utils::helpers::PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

//! Configuration validation module
//!
//! This module provides validation functions for client configuration
//! to ensure all required settings are properly configured.

use url::Url;

use super::Settings;
use crate::utils::errors::{ApiError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_storage_config(&settings.storage)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate API endpoint configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(ApiError::Config("API base URL is required".to_string()));
    }

    let url = Url::parse(&config.base_url)
        .map_err(|e| ApiError::Config(format!("invalid API base URL: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ApiError::Config(format!(
            "API base URL must be http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.timeout_seconds == 0 {
        return Err(ApiError::Config(
            "Request timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate storage path configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.public_path.trim_matches('/').is_empty() {
        return Err(ApiError::Config(
            "Storage public path is required".to_string(),
        ));
    }

    if config.placeholder.is_empty() {
        return Err(ApiError::Config(
            "Placeholder image path is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(ApiError::Config("Log level is required".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_rejects_empty_base_url() {
        let mut settings = Settings::default();
        settings.api.base_url = String::new();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut settings = Settings::default();
        settings.api.base_url = "ftp://example.com".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_empty_placeholder() {
        let mut settings = Settings::default();
        settings.storage.placeholder = String::new();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut settings = Settings::default();
        settings.api.timeout_seconds = 0;
        assert!(validate_settings(&settings).is_err());
    }
}

//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for applications embedding the hostel API client.

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Log API errors with context
pub fn log_api_error(endpoint: &str, error: &crate::ApiError) {
    error!(
        endpoint = endpoint,
        status = error.status(),
        recoverable = error.is_recoverable(),
        error = %error,
        "API request failed"
    );
}

//! Configuration management for the client.

use std::env;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the directory API
    pub api_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Bearer token for authenticated calls
    pub auth_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var("SYNDIC_API_URL").map_err(|_| ConfigError::MissingApiUrl)?;

        let timeout_secs = env::var("SYNDIC_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidTimeout)?;

        let auth_token = env::var("SYNDIC_AUTH_TOKEN").ok();

        Ok(Self {
            api_url,
            timeout_secs,
            auth_token,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SYNDIC_API_URL environment variable is required")]
    MissingApiUrl,

    #[error("Invalid SYNDIC_TIMEOUT_SECS value")]
    InvalidTimeout,
}

//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOPFRONT_API_URL` - Base URL of the storefront API (default: <http://localhost:8080>)
//! - `SHOPFRONT_TOKEN_FILE` - Path of the persisted credential file (default: .shopfront-token)

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_TOKEN_FILE: &str = ".shopfront-token";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the storefront API, without a trailing slash.
    pub api_url: String,
    /// Path of the single-slot credential file.
    pub token_file: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `SHOPFRONT_API_URL` is not an HTTP(S) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::build(
            std::env::var("SHOPFRONT_API_URL").ok(),
            std::env::var("SHOPFRONT_TOKEN_FILE").ok(),
        )
    }

    fn build(api_url: Option<String>, token_file: Option<String>) -> Result<Self, ConfigError> {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidEnvVar(
                "SHOPFRONT_API_URL".to_string(),
                format!("expected an http(s) URL, got {api_url}"),
            ));
        }

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token_file: PathBuf::from(
                token_file.unwrap_or_else(|| DEFAULT_TOKEN_FILE.to_string()),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = ClientConfig::build(None, None).expect("defaults should be valid");
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.token_file, PathBuf::from(".shopfront-token"));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig::build(Some("http://shop.example.com/".to_string()), None)
            .expect("url should be valid");
        assert_eq!(config.api_url, "http://shop.example.com");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let result = ClientConfig::build(Some("ftp://shop.example.com".to_string()), None);
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }
}

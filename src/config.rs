//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SYLIUS_STORE_DOMAIN` - Store base URL including scheme
//!   (e.g., `https://store.example.com`)
//!
//! ## Optional
//! - `SYLIUS_API_PATH` - Shop API path prefix (default: `/shop-api`)

use thiserror::Error;

const DEFAULT_API_PATH: &str = "/shop-api";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Sylius shop API configuration.
///
/// Constructed explicitly and handed to [`crate::sylius::SyliusClient::new`];
/// nothing in this crate reads the environment after construction.
#[derive(Debug, Clone)]
pub struct SyliusConfig {
    /// Store domain including scheme, without a trailing slash
    pub store_domain: String,
    /// API path prefix appended to the domain (e.g., `/shop-api`)
    pub api_path: String,
}

impl SyliusConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `SYLIUS_STORE_DOMAIN` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            store_domain: get_required_env("SYLIUS_STORE_DOMAIN")?,
            api_path: get_env_or_default("SYLIUS_API_PATH", DEFAULT_API_PATH),
        })
    }

    /// Base URL every request path is appended to.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.store_domain, self.api_path)
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

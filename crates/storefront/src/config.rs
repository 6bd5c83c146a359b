//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `OMNIWORLD_HOST` - Bind address (default: 127.0.0.1)
//! - `OMNIWORLD_PORT` - Listen port (default: 3000)
//! - `OMNIWORLD_BASE_URL` - Public URL (default: http://localhost:3000)
//! - `OMNIWORLD_DATA_DIR` - Directory for cart/notification persistence
//!   files (default: data)
//! - `OMNIWORLD_INR_RATE` - USD to INR display conversion rate
//!   (default: 83)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Directory holding the persisted cart/notification documents
    pub data_dir: PathBuf,
    /// USD to INR display conversion rate
    pub inr_rate: Decimal,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("OMNIWORLD_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("OMNIWORLD_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("OMNIWORLD_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("OMNIWORLD_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_env_or_default("OMNIWORLD_BASE_URL", "http://localhost:3000");
        let data_dir = PathBuf::from(get_env_or_default("OMNIWORLD_DATA_DIR", "data"));
        let inr_rate = parse_rate(&get_env_or_default("OMNIWORLD_INR_RATE", "83"))?;

        Ok(Self {
            host,
            port,
            base_url,
            data_dir,
            inr_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse the display conversion rate, requiring a positive value.
fn parse_rate(raw: &str) -> Result<Decimal, ConfigError> {
    let rate = raw.parse::<Decimal>().map_err(|e| {
        ConfigError::InvalidEnvVar("OMNIWORLD_INR_RATE".to_string(), e.to_string())
    })?;

    if rate <= Decimal::ZERO {
        return Err(ConfigError::InvalidEnvVar(
            "OMNIWORLD_INR_RATE".to_string(),
            format!("must be positive (got {rate})"),
        ));
    }

    Ok(rate)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rate_default() {
        assert_eq!(parse_rate("83").unwrap(), Decimal::new(83, 0));
    }

    #[test]
    fn test_parse_rate_fractional() {
        assert_eq!(parse_rate("82.75").unwrap(), Decimal::new(8275, 2));
    }

    #[test]
    fn test_parse_rate_rejects_garbage() {
        assert!(parse_rate("eighty-three").is_err());
    }

    #[test]
    fn test_parse_rate_rejects_nonpositive() {
        assert!(parse_rate("0").is_err());
        assert!(parse_rate("-5").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            data_dir: PathBuf::from("data"),
            inr_rate: Decimal::new(83, 0),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}

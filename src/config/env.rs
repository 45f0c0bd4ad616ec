// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0")
    pub server_address: String,

    /// Server listen port (default 8000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Ola Maps API key, forwarded on every upstream call
    pub ola_maps_api_key: String,

    /// Ola Maps API root (no trailing slash)
    pub ola_maps_base_url: String,

    /// Origin sent upstream when the caller declares none.
    /// Must be allow-listed on the API key.
    pub default_origin: String,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string()),

            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            ola_maps_api_key: env::var("OLA_MAPS_API_KEY").unwrap_or_else(|_| String::new()),

            ola_maps_base_url: env::var("OLA_MAPS_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "https://api.olamaps.io".to_string()),

            default_origin: env::var("DEFAULT_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.server_address.is_empty() {
            return Err("SERVER_ADDRESS must not be empty".to_string());
        }

        if self.ola_maps_api_key.is_empty() {
            log::warn!("OLA_MAPS_API_KEY not configured - upstream requests will be refused");
        }

        Ok(())
    }
}

#[cfg(test)]
impl Config {
    /// Configuration pointing at an unroutable upstream, for handler tests
    pub fn for_tests() -> Self {
        Config {
            server_address: "127.0.0.1".to_string(),
            server_port: 8000,
            environment: "test".to_string(),
            log_level: "debug".to_string(),
            ola_maps_api_key: "test-key".to_string(),
            ola_maps_base_url: "http://127.0.0.1:9".to_string(),
            default_origin: "http://localhost:3000".to_string(),
        }
    }
}

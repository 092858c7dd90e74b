// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Longest captcha lifetime accepted (one week)
pub const MAX_CAPTCHA_TIMEOUT_MINUTES: i64 = 7 * 24 * 60;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection string
    /// Format: sqlite://path/to/file.db
    pub database_url: String,

    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 8000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Maximum connections in database pool
    pub db_max_connections: u32,

    /// Connection timeout in seconds
    pub db_connection_timeout: u64,

    /// Directory holding uploaded logos and photos
    pub media_root: String,

    /// URL prefix the media directory is served under
    pub media_url: String,

    /// Lifetime of a captcha challenge
    pub captcha_timeout_minutes: i64,

    /// Accept "passed" as the answer to any captcha
    pub captcha_test_mode: bool,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://dealership.db".to_string()),

            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),

            db_connection_timeout: env::var("DB_CONNECTION_TIMEOUT")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),

            media_root: env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".to_string()),

            media_url: env::var("MEDIA_URL").unwrap_or_else(|_| "/media/".to_string()),

            captcha_timeout_minutes: env::var("CAPTCHA_TIMEOUT_MINUTES")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),

            captcha_test_mode: env::var("CAPTCHA_TEST_MODE")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.database_url.is_empty() {
            return Err("DATABASE_URL is required".to_string());
        }

        if !self.media_url.starts_with('/') || !self.media_url.ends_with('/') {
            return Err("MEDIA_URL must start and end with '/'".to_string());
        }

        if !(1..=MAX_CAPTCHA_TIMEOUT_MINUTES).contains(&self.captcha_timeout_minutes) {
            return Err(format!(
                "CAPTCHA_TIMEOUT_MINUTES must be between 1 and {}",
                MAX_CAPTCHA_TIMEOUT_MINUTES
            ));
        }

        if self.captcha_test_mode && self.environment == "production" {
            log::warn!("CAPTCHA_TEST_MODE is enabled in production - forms are unprotected");
        }

        Ok(())
    }
}

#[cfg(test)]
impl Config {
    /// Configuration used by unit tests; never touches the environment
    pub fn for_tests() -> Self {
        Config {
            database_url: "sqlite::memory:".to_string(),
            server_address: "127.0.0.1".to_string(),
            server_port: 8000,
            environment: "test".to_string(),
            log_level: "debug".to_string(),
            db_max_connections: 1,
            db_connection_timeout: 5,
            media_root: "media".to_string(),
            media_url: "/media/".to_string(),
            captcha_timeout_minutes: 5,
            captcha_test_mode: false,
        }
    }
}

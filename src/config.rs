//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! Either `DATABASE_URL` or all of (`DB_HOST`, `DB_USER`, `DB_PASSWORD`,
//! `DB_NAME`).
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public prefix for rendered short URLs (default:
//!   `http://localhost:3000`)
//! - `RUST_LOG` - Log filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SHORT_CODE_LENGTH` - Generated code length (default: 6)
//! - `CUSTOM_CODE_MIN_LENGTH` / `CUSTOM_CODE_MAX_LENGTH` - Custom code
//!   bounds (defaults: 3 / 20)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 10)

use anyhow::{Context, Result};
use std::env;

use crate::utils::CodePolicy;

/// Hard ceiling on generated code length growth.
const MAX_CODE_LENGTH: usize = 64;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// Length of generated short codes before collision-driven growth.
    pub code_length: usize,
    pub custom_code_min_length: usize,
    pub custom_code_max_length: usize,
    /// Maximum number of connections in the pool.
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required database configuration is missing.
    pub fn from_env() -> Result<Self> {
        let database_url =
            Self::load_database_url().context("Failed to load database configuration")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let code_length = env::var("SHORT_CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(6);

        let custom_code_min_length = env::var("CUSTOM_CODE_MIN_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let custom_code_max_length = env::var("CUSTOM_CODE_MAX_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(20);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            database_url,
            listen_addr,
            base_url,
            log_level,
            log_format,
            code_length,
            custom_code_min_length,
            custom_code_max_length,
            db_max_connections,
        })
    }

    /// Loads database URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. Constructed from `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`
    fn load_database_url() -> Result<String> {
        if let Ok(url) = env::var("DATABASE_URL") {
            return Ok(url);
        }

        let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
        let user =
            env::var("DB_USER").context("DB_USER must be set when DATABASE_URL is not provided")?;
        let password = env::var("DB_PASSWORD")
            .context("DB_PASSWORD must be set when DATABASE_URL is not provided")?;
        let name =
            env::var("DB_NAME").context("DB_NAME must be set when DATABASE_URL is not provided")?;

        Ok(format!(
            "postgres://{}:{}@{}:{}/{}",
            user, password, host, port, name
        ))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the listen address does not parse, the log format
    /// is unknown, or the code length settings are inconsistent.
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        self.listen_addr
            .parse::<std::net::SocketAddr>()
            .with_context(|| format!("LISTEN is not a valid socket address: {}", self.listen_addr))?;

        if self.code_length == 0 || self.code_length > MAX_CODE_LENGTH {
            anyhow::bail!(
                "SHORT_CODE_LENGTH must be between 1 and {MAX_CODE_LENGTH}, got {}",
                self.code_length
            );
        }

        if self.custom_code_min_length == 0
            || self.custom_code_min_length > self.custom_code_max_length
        {
            anyhow::bail!(
                "custom code bounds are inconsistent: min {} max {}",
                self.custom_code_min_length,
                self.custom_code_max_length
            );
        }

        Ok(())
    }

    /// Code generation policy derived from the configured knobs.
    pub fn code_policy(&self) -> CodePolicy {
        CodePolicy {
            default_length: self.code_length,
            max_length: MAX_CODE_LENGTH,
            attempts_per_length: 10,
            custom_min_length: self.custom_code_min_length,
            custom_max_length: self.custom_code_max_length,
        }
    }
}

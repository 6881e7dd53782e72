//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Shortest HMAC secret accepted for signing tokens
pub const MIN_JWT_SECRET_LEN: usize = 32;

/// Cost bounds accepted by bcrypt
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS; `"*"` allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// JWT configuration
#[derive(Clone, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in_secs: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("expires_in_secs", &self.expires_in_secs)
            .finish()
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub bcrypt_cost: u32,
}

/// Material upload configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UploadsConfig {
    pub dir: PathBuf,
    pub max_bytes: usize,
}

/// Per-IP rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    pub enabled: bool,
    pub replenish_secs: u64,
    pub burst_size: u32,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub auth: AuthConfig,
    pub uploads: UploadsConfig,
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source can't be read or the result fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        let config: Self = Config::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(true))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Override with environment variables (e.g., APP__JWT__SECRET)
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the service cannot run safely with
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` describing the first invalid setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::Message(format!(
                "jwt.secret must be at least {MIN_JWT_SECRET_LEN} bytes"
            )));
        }
        if self.jwt.expires_in_secs <= 0 {
            return Err(ConfigError::Message("jwt.expires_in_secs must be positive".to_string()));
        }
        if !BCRYPT_COST_RANGE.contains(&self.auth.bcrypt_cost) {
            return Err(ConfigError::Message(format!(
                "auth.bcrypt_cost must be between {} and {}",
                BCRYPT_COST_RANGE.start(),
                BCRYPT_COST_RANGE.end()
            )));
        }
        if self.rate_limit.enabled && (self.rate_limit.replenish_secs == 0 || self.rate_limit.burst_size == 0) {
            return Err(ConfigError::Message(
                "rate_limit.replenish_secs and rate_limit.burst_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

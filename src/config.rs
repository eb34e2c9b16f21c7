//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before any socket is opened.

use std::env;
use std::time::Duration;

use crate::constants::{
    DEFAULT_JUDGE0_API_HOST, DEFAULT_JUDGE0_REQUEST_TIMEOUT_SECS,
    DEFAULT_POLL_DEADLINE_SECS, DEFAULT_POLL_INTERVAL_MS, DEFAULT_POLL_MAX_ATTEMPTS,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};
use crate::execution::PollPolicy;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub judge0: Judge0Config,
    pub polling: PollingConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Judge0 upstream configuration
#[derive(Clone)]
pub struct Judge0Config {
    pub api_key: String,
    pub api_host: String,
    pub base_url: String,
    pub request_timeout: Duration,
}

/// Poll loop configuration
#[derive(Debug, Clone)]
pub struct PollingConfig {
    pub interval_ms: u64,
    /// 0 means unbounded
    pub max_attempts: u32,
    /// 0 means unbounded
    pub deadline_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            judge0: Judge0Config::from_env()?,
            polling: PollingConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: parse_or_default("PORT", DEFAULT_SERVER_PORT)?,
        })
    }
}

impl Judge0Config {
    fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("JUDGE0_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::Missing("JUDGE0_API_KEY".to_string()))?;
        let api_host =
            env::var("JUDGE0_API_HOST").unwrap_or_else(|_| DEFAULT_JUDGE0_API_HOST.to_string());
        let base_url = env::var("JUDGE0_BASE_URL")
            .unwrap_or_else(|_| format!("https://{}", api_host))
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            api_key,
            api_host,
            base_url,
            request_timeout: Duration::from_secs(parse_or_default(
                "JUDGE0_REQUEST_TIMEOUT_SECS",
                DEFAULT_JUDGE0_REQUEST_TIMEOUT_SECS,
            )?),
        })
    }
}

// The API key must never end up in logs.
impl std::fmt::Debug for Judge0Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Judge0Config")
            .field("api_key", &"<redacted>")
            .field("api_host", &self.api_host)
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl PollingConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            interval_ms: parse_or_default("POLL_INTERVAL_MS", DEFAULT_POLL_INTERVAL_MS)?,
            max_attempts: parse_or_default("POLL_MAX_ATTEMPTS", DEFAULT_POLL_MAX_ATTEMPTS)?,
            deadline_secs: parse_or_default("POLL_DEADLINE_SECS", DEFAULT_POLL_DEADLINE_SECS)?,
        })
    }

    /// Build the poll policy used by every execution request
    pub fn policy(&self) -> PollPolicy {
        PollPolicy {
            interval: Duration::from_millis(self.interval_ms),
            max_attempts: (self.max_attempts > 0).then_some(self.max_attempts),
            deadline: (self.deadline_secs > 0).then(|| Duration::from_secs(self.deadline_secs)),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_POLL_INTERVAL_MS,
            max_attempts: DEFAULT_POLL_MAX_ATTEMPTS,
            deadline_secs: DEFAULT_POLL_DEADLINE_SECS,
        }
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        Err(_) => Ok(default),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::*;

/// Backend configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    /// No schema is selected when unset; table creation then fails and is retried
    pub db_name: Option<String>,
    pub db_max_connections: u32,
    pub retry_backoff_secs: u64,
}

/// Frontend proxy configuration
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    pub server_host: String,
    pub server_port: u16,
    pub backend_url: String,
    pub static_dir: String,
}

/// Smoke test configuration
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub backend_url: String,
    pub max_retries: u32,
    pub interval_secs: u64,
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, String> {
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| format!("Invalid {}", key)),
        None => Ok(default),
    }
}

fn string_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

fn backend_url(lookup: &impl Fn(&str) -> Option<String>) -> String {
    string_or(lookup, "BACKEND_URL", DEFAULT_BACKEND_URL)
        .trim_end_matches('/')
        .to_string()
}

fn process_env(key: &str) -> Option<String> {
    env::var(key).ok()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();
        Self::from_lookup(process_env)
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let db_max_connections =
            parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;
        if db_max_connections == 0 {
            return Err("DB_MAX_CONNECTIONS must be at least 1".to_string());
        }

        Ok(Config {
            server_host: string_or(&lookup, "SERVER_HOST", "0.0.0.0"),
            server_port: parse_or(&lookup, "SERVER_PORT", DEFAULT_BACKEND_PORT)?,
            db_host: string_or(&lookup, "DB_HOST", "localhost"),
            db_port: parse_or(&lookup, "DB_PORT", DEFAULT_DB_PORT)?,
            db_user: string_or(&lookup, "DB_USER", "root"),
            db_password: string_or(&lookup, "DB_PASSWORD", ""),
            db_name: lookup("DB_NAME").filter(|name| !name.is_empty()),
            db_max_connections,
            retry_backoff_secs: parse_or(
                &lookup,
                "DB_RETRY_BACKOFF_SECS",
                DEFAULT_RETRY_BACKOFF_SECS,
            )?,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_secs(self.retry_backoff_secs)
    }
}

impl FrontendConfig {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        Self::from_lookup(process_env)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        Ok(FrontendConfig {
            server_host: string_or(&lookup, "FRONTEND_HOST", "0.0.0.0"),
            server_port: parse_or(&lookup, "FRONTEND_PORT", DEFAULT_FRONTEND_PORT)?,
            backend_url: backend_url(&lookup),
            static_dir: string_or(&lookup, "STATIC_DIR", "public"),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl HarnessConfig {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        Self::from_lookup(process_env)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        Ok(HarnessConfig {
            backend_url: backend_url(&lookup),
            max_retries: parse_or(&lookup, "HARNESS_MAX_RETRIES", DEFAULT_HARNESS_MAX_RETRIES)?,
            interval_secs: parse_or(
                &lookup,
                "HARNESS_INTERVAL_SECS",
                DEFAULT_HARNESS_INTERVAL_SECS,
            )?,
        })
    }
}

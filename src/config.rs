use crate::errors::{ServiceError, ServiceResult};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://recipes.db?mode=rwc";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Process configuration, read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret every request must present in `x-api-key`
    pub api_key: String,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from the environment, after reading `.env` if present
    pub fn load() -> ServiceResult<Self> {
        if let Err(e) = dotenv::dotenv() {
            log::debug!("No .env file loaded: {}", e);
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> ServiceResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ServiceError::Configuration("API_KEY must be set".to_string()))?;

        Ok(Self {
            api_key,
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or_default(&lookup, "PORT", DEFAULT_PORT)?,
            max_connections: parse_or_default(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
        })
    }

    /// Address the HTTP listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> ServiceResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.parse().map_err(|e| {
            ServiceError::Configuration(format!("Invalid {} value '{}': {}", key, raw, e))
        }),
        None => {
            log::info!("{} not set, using default: {}", key, default);
            Ok(default)
        }
    }
}

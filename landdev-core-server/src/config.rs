//! Process configuration read from the environment
//!
//! A `.env` file in the working directory is loaded first when present.
//! Variables already set in the environment take precedence over it.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use dotenvy::dotenv;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Which persistence backend serves the agreement and user stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Postgres,
    Document,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "document" => Ok(StoreBackend::Document),
            other => Err(format!("unknown backend '{other}', expected postgres or document")),
        }
    }
}

/// Credentials of a user created at startup if absent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: SocketAddr,
    pub store_backend: StoreBackend,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub database_acquire_timeout: Duration,
    pub secret_key: String,
    pub access_token_expire_minutes: u64,
    pub bcrypt_cost: u32,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
    pub seed_user: Option<SeedUser>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any name-to-value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let store_backend = parse_or("STORE_BACKEND", get("STORE_BACKEND"), StoreBackend::default())?;

        let database_url = get("DATABASE_URL");
        if store_backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let secret_key = get("SECRET_KEY").ok_or(ConfigError::Missing("SECRET_KEY"))?;

        let bcrypt_cost = parse_or("BCRYPT_COST", get("BCRYPT_COST"), landdev_core_api::DEFAULT_BCRYPT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                name: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
                reason: "must be between 4 and 31".to_string(),
            });
        }

        let cors_origins: Vec<String> = get("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();
        let cors_origins = if cors_origins.iter().any(|origin| origin == "*") {
            Vec::new()
        } else {
            cors_origins
        };

        let seed_user = match (get("SEED_USERNAME"), get("SEED_PASSWORD")) {
            (Some(username), Some(password)) => Some(SeedUser { username, password }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("SEED_PASSWORD")),
            (None, Some(_)) => return Err(ConfigError::Missing("SEED_USERNAME")),
        };

        Ok(AppConfig {
            bind_address: parse_or(
                "BIND_ADDRESS",
                get("BIND_ADDRESS"),
                SocketAddr::from(([0, 0, 0, 0], 8000)),
            )?,
            store_backend,
            database_url,
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                get("DATABASE_MAX_CONNECTIONS"),
                5,
            )?,
            database_acquire_timeout: Duration::from_secs(parse_or(
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                get("DATABASE_ACQUIRE_TIMEOUT_SECS"),
                30,
            )?),
            secret_key,
            access_token_expire_minutes: parse_or(
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                get("ACCESS_TOKEN_EXPIRE_MINUTES"),
                landdev_core_api::DEFAULT_TOKEN_TTL_MINUTES,
            )?,
            bcrypt_cost,
            cors_origins,
            seed_user,
        })
    }
}

fn parse_or<T>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::Invalid {
                name,
                reason: e.to_string(),
                value,
            })
        }
    }
}

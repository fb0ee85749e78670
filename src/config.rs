//! Runtime configuration read from the process environment.

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid database URL: {0}")]
    InvalidUrl(String),
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Grace period for in-flight requests on shutdown. Actix's default when unset.
    pub shutdown_timeout: Option<u64>,
}

/// Connection pool settings. Pool limits are optional; unset values keep the
/// pool library's defaults.
#[derive(Clone, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: Option<u32>,
    pub acquire_timeout: Option<Duration>,
    pub idle_timeout: Option<Duration>,
    pub run_migrations: bool,
}

// The URL carries credentials, keep it out of logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .field("pool_size", &self.pool_size)
            .field("acquire_timeout", &self.acquire_timeout)
            .field("idle_timeout", &self.idle_timeout)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl Settings {
    /// Load settings from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server = ServerConfig {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_var(&lookup, "PORT")?.unwrap_or(8080),
            shutdown_timeout: parse_var(&lookup, "SHUTDOWN_TIMEOUT_SECS")?,
        };

        let database = DatabaseConfig {
            url: database_url(&lookup)?,
            pool_size: parse_positive(&lookup, "DB_POOL_SIZE")?,
            acquire_timeout: parse_positive(&lookup, "DB_ACQUIRE_TIMEOUT_MS")?
                .map(Duration::from_millis),
            idle_timeout: parse_positive(&lookup, "DB_IDLE_TIMEOUT_MS")?
                .map(Duration::from_millis),
            run_migrations: parse_var(&lookup, "RUN_MIGRATIONS")?.unwrap_or(false),
        };

        Ok(Self { server, database })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

/// Like [`parse_var`], but zero is rejected. r2d2 panics on zero pool limits.
fn parse_positive<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Default + PartialEq,
{
    match parse_var::<_, T>(lookup, key)? {
        Some(v) if v == T::default() => Err(ConfigError::InvalidValue {
            key,
            value: lookup(key).unwrap_or_default(),
        }),
        other => Ok(other),
    }
}

fn require<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).ok_or(ConfigError::MissingVar(key))
}

/// `DATABASE_URL` wins; otherwise the URL is assembled from the individual
/// `DB_*` variables.
fn database_url<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DATABASE_URL") {
        return Ok(url);
    }

    let host = require(lookup, "DB_HOST")?;
    let user = require(lookup, "DB_USER")?;
    let name = require(lookup, "DB_NAME")?;

    let mut url = Url::parse(&format!("postgres://{host}"))
        .map_err(|e| ConfigError::InvalidUrl(e.to_string()))?;
    url.set_username(&user)
        .map_err(|_| ConfigError::InvalidUrl(format!("cannot use DB_USER '{user}'")))?;
    if let Some(password) = lookup("DB_PASSWORD") {
        url.set_password(Some(&password))
            .map_err(|_| ConfigError::InvalidUrl("cannot use DB_PASSWORD".to_string()))?;
    }
    if let Some(port) = parse_var::<_, u16>(lookup, "DB_PORT")? {
        url.set_port(Some(port))
            .map_err(|_| ConfigError::InvalidUrl(format!("cannot use DB_PORT {port}")))?;
    }
    url.set_path(&name);

    Ok(url.into())
}

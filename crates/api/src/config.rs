use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Port the service listens on unless `GRPC_PORT` overrides it.
pub const DEFAULT_GRPC_PORT: u16 = 50051;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Postgres connection string.
    pub database_url: String,
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `50051`).
    pub port: u16,
    /// Connection pool size (default: `20`).
    pub max_connections: u32,
    /// Per-call timeout in seconds. Unset means calls never time out
    /// server-side.
    pub request_timeout_secs: Option<u64>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default     |
    /// |------------------------|-------------|
    /// | `PG_DSN`               | (required)  |
    /// | `GRPC_HOST`            | `0.0.0.0`   |
    /// | `GRPC_PORT`            | `50051`     |
    /// | `DB_MAX_CONNECTIONS`   | `20`        |
    /// | `REQUEST_TIMEOUT_SECS` | (none)      |
    ///
    /// `DATABASE_URL` is accepted when `PG_DSN` is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("PG_DSN")
            .filter(|v| !v.trim().is_empty())
            .or_else(|| lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()))
            .ok_or(ConfigError::Missing("PG_DSN"))?;

        Ok(Self {
            database_url,
            host: parse_var(&lookup, "GRPC_HOST", IpAddr::from([0, 0, 0, 0]), "IP address")?,
            port: parse_var(&lookup, "GRPC_PORT", DEFAULT_GRPC_PORT, "u16")?,
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", 20, "u32")?,
            request_timeout_secs: parse_optional_var(&lookup, "REQUEST_TIMEOUT_SECS", "u64")?,
        })
    }

    /// Socket address the listener binds to.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<F, T>(
    lookup: &F,
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    Ok(parse_optional_var(lookup, name, expected)?.unwrap_or(default))
}

fn parse_optional_var<F, T>(
    lookup: &F,
    name: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                name,
                expected,
                value: raw,
            }),
    }
}

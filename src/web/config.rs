//! Server configuration sourced from the environment.

use std::env;
use std::net::SocketAddr;
use thiserror::Error;

/// Environment variable naming the listen address.
pub const BIND_ENV: &str = "TASKBOARD_BIND";

/// Environment variable naming the `PostgreSQL` connection URL.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Runtime configuration for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// `PostgreSQL` connection URL; in-memory storage is used when unset.
    pub database_url: Option<String>,
}

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured bind address does not parse.
    #[error("invalid bind address '{value}': {source}")]
    InvalidBindAddress {
        /// The rejected address value.
        value: String,
        /// The underlying parse failure.
        source: std::net::AddrParseError,
    },
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBindAddress`] when the configured bind
    /// address does not parse as `host:port`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind = env::var(BIND_ENV).unwrap_or_else(|_| DEFAULT_BIND.to_owned());
        let bind_addr = bind
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddress {
                value: bind.clone(),
                source,
            })?;
        let database_url = env::var(DATABASE_URL_ENV).ok().filter(|url| !url.is_empty());
        Ok(Self {
            bind_addr,
            database_url,
        })
    }
}

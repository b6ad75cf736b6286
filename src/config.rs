//! Process settings read from the environment.
//!
//! | variable              | fallback       | default  |
//! |-----------------------|----------------|----------|
//! | `KANBAN_DATABASE_URL` | `DATABASE_URL` | required |
//! | `KANBAN_DB_POOL_SIZE` |                | `4`      |
//! | `KANBAN_LOG`          | `RUST_LOG`     | `info`   |

use std::env;
use thiserror::Error;

/// Primary variable holding the `PostgreSQL` connection URL.
pub const DATABASE_URL_VAR: &str = "KANBAN_DATABASE_URL";
/// Variable consulted when [`DATABASE_URL_VAR`] is unset.
pub const DATABASE_URL_FALLBACK_VAR: &str = "DATABASE_URL";
/// Variable holding the maximum connection pool size.
pub const POOL_SIZE_VAR: &str = "KANBAN_DB_POOL_SIZE";
/// Primary variable holding the tracing filter directive.
pub const LOG_FILTER_VAR: &str = "KANBAN_LOG";
/// Variable consulted when [`LOG_FILTER_VAR`] is unset.
pub const LOG_FILTER_FALLBACK_VAR: &str = "RUST_LOG";

/// Pool size used when none is configured.
pub const DEFAULT_POOL_SIZE: u32 = 4;
/// Tracing filter used when none is configured.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while reading settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No database URL was configured.
    #[error("required environment variable '{name}' is not set")]
    MissingVariable {
        /// The primary variable name.
        name: &'static str,
    },

    /// A variable was set to a value that could not be used.
    #[error("environment variable '{name}' has invalid value '{value}': {reason}")]
    InvalidValue {
        /// The variable name.
        name: &'static str,
        /// The rejected value.
        value: String,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Settings for the board process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSettings {
    database_url: String,
    pool_size: u32,
    log_filter: String,
}

impl BoardSettings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the database URL is missing or a value is
    /// malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// value. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the database URL is missing or a value is
    /// malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = read(DATABASE_URL_VAR)
            .or_else(|| read(DATABASE_URL_FALLBACK_VAR))
            .ok_or(ConfigError::MissingVariable {
                name: DATABASE_URL_VAR,
            })?;

        let pool_size = read(POOL_SIZE_VAR)
            .map(|raw| parse_pool_size(&raw))
            .transpose()?
            .unwrap_or(DEFAULT_POOL_SIZE);

        let log_filter = read(LOG_FILTER_VAR)
            .or_else(|| read(LOG_FILTER_FALLBACK_VAR))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        Ok(Self {
            database_url,
            pool_size,
            log_filter,
        })
    }

    /// Returns the `PostgreSQL` connection URL.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Returns the maximum connection pool size.
    #[must_use]
    pub const fn pool_size(&self) -> u32 {
        self.pool_size
    }

    /// Returns the tracing filter directive.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

fn parse_pool_size(raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason| ConfigError::InvalidValue {
        name: POOL_SIZE_VAR,
        value: raw.to_owned(),
        reason,
    };
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(invalid("pool size must be positive")),
        Ok(size) => Ok(size),
        Err(_) => Err(invalid("expected a positive integer")),
    }
}

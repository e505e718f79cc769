use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use newsroom_core::pagination::{PageDefaults, DEFAULT_LIMIT, DEFAULT_OFFSET};
use newsroom_db::DbConfig;

use crate::auth::jwt::JwtConfig;
use crate::telemetry::LogConfig;

/// Configuration could not be assembled from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret and the database name have defaults
/// suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Defaults for `GET /list` when `limit`/`offset` are omitted.
    pub pagination: PageDefaults,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Database connection and pool sizing.
    pub database: DbConfig,
    /// Log filter and output format.
    pub log: LogConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `PAGINATION_LIMIT`     | `10`                       |
    /// | `PAGINATION_OFFSET`    | `0`                        |
    ///
    /// JWT, database and logging keys are documented on [`JwtConfig::from_env`],
    /// [`database_from_env`] and [`LogConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_or("HOST", "0.0.0.0".to_string())?;
        let port: u16 = env_or("PORT", 3000)?;

        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|e| ConfigError::Invalid {
                    key: "CORS_ORIGINS",
                    value: origin.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", 30)?;

        let pagination = PageDefaults {
            limit: non_negative("PAGINATION_LIMIT", env_or("PAGINATION_LIMIT", DEFAULT_LIMIT)?)?,
            offset: non_negative(
                "PAGINATION_OFFSET",
                env_or("PAGINATION_OFFSET", DEFAULT_OFFSET)?,
            )?,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            pagination,
            jwt: JwtConfig::from_env()?,
            database: database_from_env()?,
            log: LogConfig::from_env(),
        })
    }
}

/// Load database settings.
///
/// `DATABASE_URL` wins when set; otherwise the URL is assembled from parts.
///
/// | Env Var                | Required | Default     |
/// |------------------------|----------|-------------|
/// | `DATABASE_URL`         | no       | --          |
/// | `DB_USER`              | no       | `postgres`  |
/// | `DB_PASSWORD`          | no       | empty       |
/// | `DB_HOST`              | no       | `localhost` |
/// | `DB_PORT`              | no       | `5432`      |
/// | `DB_NAME`              | **yes**¹ | --          |
/// | `DB_MAX_OPEN_CONNS`    | no       | `20`        |
/// | `DB_MAX_IDLE_CONNS`    | no       | `2`         |
/// | `DB_MAX_LIFETIME_MINS` | no       | `30`        |
///
/// ¹ only when `DATABASE_URL` is unset.
pub fn database_from_env() -> Result<DbConfig, ConfigError> {
    let url = match std::env::var("DATABASE_URL") {
        Ok(url) if !url.is_empty() => url,
        _ => {
            let user = env_or("DB_USER", "postgres".to_string())?;
            let password = env_or("DB_PASSWORD", String::new())?;
            let host = env_or("DB_HOST", "localhost".to_string())?;
            let port: u16 = env_or("DB_PORT", 5432)?;
            let name = std::env::var("DB_NAME")
                .ok()
                .filter(|name| !name.is_empty())
                .ok_or(ConfigError::Missing("DATABASE_URL or DB_NAME"))?;
            format!("postgres://{user}:{password}@{host}:{port}/{name}")
        }
    };

    let max_lifetime_mins: u64 = env_or("DB_MAX_LIFETIME_MINS", 30)?;

    Ok(DbConfig {
        url,
        max_connections: env_or("DB_MAX_OPEN_CONNS", 20)?,
        min_connections: env_or("DB_MAX_IDLE_CONNS", 2)?,
        max_lifetime: Duration::from_secs(max_lifetime_mins * 60),
    })
}

/// PostgreSQL rejects negative LIMIT/OFFSET, so such defaults fail at startup.
fn non_negative(key: &'static str, value: i32) -> Result<i32, ConfigError> {
    if value < 0 {
        return Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: "must not be negative".into(),
        });
    }
    Ok(value)
}

/// Read and parse `key`, returning `default` when it is unset.
pub(crate) fn env_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn negative_pagination_default_is_rejected() {
        assert_matches!(
            non_negative("PAGINATION_LIMIT", -1),
            Err(ConfigError::Invalid { key: "PAGINATION_LIMIT", .. })
        );
    }

    #[test]
    fn zero_and_positive_pagination_defaults_pass() {
        assert_eq!(non_negative("PAGINATION_OFFSET", 0).unwrap(), 0);
        assert_eq!(non_negative("PAGINATION_LIMIT", 25).unwrap(), 25);
    }
}

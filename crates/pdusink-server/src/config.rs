//! Configuration for the server binary.
//!
//! All configuration is loaded from environment variables. The API token
//! is the only required value; it is a single static secret with no
//! rotation and must be kept out of source control and logs.

use std::time::Duration;

use pdusink_api::server::DEFAULT_PORT;
use pdusink_api::{ApiToken, DEFAULT_MAX_BODY_BYTES, ServerConfig};
use pdusink_db::sqlite::DEFAULT_DATABASE_URL;
use pdusink_db::SqliteConfig;

use crate::error::StartupError;

/// Complete server configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listener address.
    pub server: ServerConfig,
    /// Store location and pool settings.
    pub database: SqliteConfig,
    /// The shared bearer secret.
    pub api_token: ApiToken,
    /// Request body cap in bytes.
    pub max_body_bytes: usize,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Required variables:
    /// - `API_TOKEN` -- the shared bearer secret (non-empty)
    ///
    /// Optional variables:
    /// - `PORT` -- listening port (default 8080)
    /// - `HOST` -- bind address (default `0.0.0.0`)
    /// - `DATABASE_URL` -- `SQLite` URL (default `sqlite:pdus.db`)
    /// - `DB_MAX_CONNECTIONS` -- pool size (default 5)
    /// - `DB_CONNECT_TIMEOUT_SECS` -- pool acquire timeout in seconds (default 5)
    /// - `MAX_BODY_BYTES` -- request body cap (default 2 MiB)
    ///
    /// Empty values are treated as unset.
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let api_token = get("API_TOKEN")
            .map(ApiToken::new)
            .ok_or_else(|| StartupError::Config(String::from("missing required env var API_TOKEN")))?;

        let port: u16 = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let host = get("HOST").unwrap_or_else(|| ServerConfig::default().host);

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());
        let database = SqliteConfig::new(&database_url);
        let max_connections: u32 = parse_or(
            "DB_MAX_CONNECTIONS",
            get("DB_MAX_CONNECTIONS"),
            database.max_connections,
        )?;
        if max_connections == 0 {
            return Err(StartupError::Config(String::from(
                "invalid DB_MAX_CONNECTIONS: must be at least 1",
            )));
        }

        let connect_timeout_secs: u64 = parse_or(
            "DB_CONNECT_TIMEOUT_SECS",
            get("DB_CONNECT_TIMEOUT_SECS"),
            database.connect_timeout.as_secs(),
        )?;

        let max_body_bytes: usize =
            parse_or("MAX_BODY_BYTES", get("MAX_BODY_BYTES"), DEFAULT_MAX_BODY_BYTES)?;

        Ok(Self {
            server: ServerConfig { host, port },
            database: database
                .with_max_connections(max_connections)
                .with_connect_timeout(Duration::from_secs(connect_timeout_secs)),
            api_token,
            max_body_bytes,
        })
    }
}

/// Parse an optional variable, falling back to `default` when unset.
fn parse_or<T>(name: &str, value: Option<String>, default: T) -> Result<T, StartupError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.map_or(Ok(default), |raw| {
        raw.parse()
            .map_err(|e| StartupError::Config(format!("invalid {name}: {e}")))
    })
}

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use pboard_db::PoolSettings;
use sqlx::postgres::PgConnectOptions;
use tokio::net::TcpListener;

/// An environment variable held a value that could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got '{value}'")]
    Invalid {
        key: String,
        expected: &'static str,
        value: String,
    },

    #[error("{key} {reason}")]
    OutOfRange { key: String, reason: &'static str },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running next to a local database
/// container. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8501`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Data store connection settings.
    pub database: DatabaseConfig,
    /// Text shown around the table.
    pub dashboard: DashboardConfig,
}

/// Where and how to reach the data store.
///
/// When `url` is set it wins; otherwise the connection is assembled from
/// the individual parts.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
    /// Apply embedded migrations at startup (default: `false`; the table is
    /// normally managed out-of-band).
    pub run_migrations: bool,
}

/// Page title and caption.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub title: String,
    pub caption: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                          |
    /// |---------------------------|----------------------------------|
    /// | `HOST`                    | `0.0.0.0`                        |
    /// | `PORT`                    | `8501`                           |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                             |
    /// | `DATABASE_URL`            | unset (built from `DB_*`)        |
    /// | `DB_HOST`                 | `localhost`                      |
    /// | `DB_PORT`                 | `5432`                           |
    /// | `DB_USER`                 | `postgres`                       |
    /// | `DB_PASSWORD`             | `postgres`                       |
    /// | `DB_NAME`                 | `passengers`                     |
    /// | `DB_MAX_CONNECTIONS`      | `1`                              |
    /// | `DB_CONNECT_TIMEOUT_SECS` | `5`                              |
    /// | `RUN_MIGRATIONS`          | `false`                          |
    /// | `DASHBOARD_TITLE`         | `Passenger List`                 |
    /// | `DASHBOARD_CAPTION`       | `Rows from the passengers table` |
    ///
    /// An empty value counts as unset. `HOST` may be an IP literal or a
    /// hostname such as `localhost`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| {
            non_blank(&lookup, key).unwrap_or_else(|| default.to_string())
        };

        let database = DatabaseConfig {
            url: non_blank(&lookup, "DATABASE_URL"),
            host: text("DB_HOST", "localhost"),
            port: parse_var(&lookup, "DB_PORT", 5432)?,
            user: text("DB_USER", "postgres"),
            password: text("DB_PASSWORD", "postgres"),
            name: text("DB_NAME", "passengers"),
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", 1)?,
            connect_timeout_secs: parse_var(&lookup, "DB_CONNECT_TIMEOUT_SECS", 5)?,
            run_migrations: parse_bool(&lookup, "RUN_MIGRATIONS", false)?,
        };

        if database.max_connections == 0 {
            return Err(ConfigError::OutOfRange {
                key: "DB_MAX_CONNECTIONS".into(),
                reason: "must be at least 1",
            });
        }

        let dashboard = DashboardConfig {
            title: text("DASHBOARD_TITLE", "Passenger List"),
            caption: text("DASHBOARD_CAPTION", "Rows from the passengers table"),
        };

        Ok(Self {
            host: text("HOST", "0.0.0.0"),
            port: parse_var(&lookup, "PORT", 8501)?,
            request_timeout_secs: parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30)?,
            database,
            dashboard,
        })
    }
}

impl ServerConfig {
    /// Bind the HTTP listener on `host:port`, resolving `host` if it is a
    /// name rather than an IP literal.
    pub async fn bind_listener(&self) -> std::io::Result<TcpListener> {
        TcpListener::bind((self.host.as_str(), self.port)).await
    }
}

impl DatabaseConfig {
    /// Build sqlx connect options from the URL or the individual parts.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.url {
            Some(url) => url.parse(),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.name)),
        }
    }

    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.max_connections,
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}

// Keeps credentials out of logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

/// Look up `key`, treating an empty or whitespace-only value as unset.
fn non_blank<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|s| !s.trim().is_empty())
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match non_blank(lookup, key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key: key.to_string(),
            expected: short_type_name::<T>(),
            value: raw,
        }),
    }
}

fn parse_bool<F>(lookup: &F, key: &str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match non_blank(lookup, key) {
        None => Ok(default),
        Some(raw) => {
            let normalized = raw.trim().to_ascii_lowercase();
            match normalized.as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::Invalid {
                    key: key.to_string(),
                    expected: "boolean",
                    value: raw,
                }),
            }
        }
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

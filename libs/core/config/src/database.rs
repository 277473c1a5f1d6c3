use crate::{env_parse, env_required, ConfigError, FromEnv};
use std::time::Duration;

/// PostgreSQL connection pool settings
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    /// Log every statement through sqlx
    pub sqlx_logging: bool,
    /// Apply pending migrations on startup
    pub run_migrations: bool,
}

impl PostgresConfig {
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FromEnv for PostgresConfig {
    /// Requires DATABASE_URL; pool settings fall back to defaults
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_required("DATABASE_URL")?;
        let max_connections = env_parse("DB_MAX_CONNECTIONS", "10")?;
        let min_connections = env_parse("DB_MIN_CONNECTIONS", "1")?;
        let connect_timeout_secs: u64 = env_parse("DB_CONNECT_TIMEOUT_SECS", "8")?;
        let sqlx_logging = env_parse("DB_SQLX_LOGGING", "false")?;
        let run_migrations = env_parse("RUN_MIGRATIONS", "true")?;

        if min_connections > max_connections {
            return Err(ConfigError::InvalidValue {
                key: "DB_MIN_CONNECTIONS".to_string(),
                details: format!(
                    "{} exceeds DB_MAX_CONNECTIONS ({})",
                    min_connections, max_connections
                ),
            });
        }

        Ok(Self {
            url,
            max_connections,
            min_connections,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            sqlx_logging,
            run_migrations,
        })
    }
}

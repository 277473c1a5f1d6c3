//! Configuration for Beer API

use core_config::database::PostgresConfig;
use core_config::{app_info, env_or_default, server::ServerConfig, AppInfo, ConfigError, FromEnv};

pub use core_config::Environment;

/// Which repository backs the service, chosen by `STORE_BACKEND`
#[derive(Clone, Debug)]
pub enum StoreConfig {
    Memory,
    Postgres(PostgresConfig),
}

impl FromEnv for StoreConfig {
    /// `memory` (default) or `postgres`; the latter requires `DATABASE_URL`
    fn from_env() -> Result<Self, ConfigError> {
        let backend = env_or_default("STORE_BACKEND", "memory");

        match backend.to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreConfig::Memory),
            "postgres" | "postgresql" => Ok(StoreConfig::Postgres(PostgresConfig::from_env()?)),
            other => Err(ConfigError::InvalidValue {
                key: "STORE_BACKEND".to_string(),
                details: format!("expected 'memory' or 'postgres', got '{}'", other),
            }),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let store = StoreConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            store,
            environment,
        })
    }
}

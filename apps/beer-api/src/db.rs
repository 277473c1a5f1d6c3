//! PostgreSQL connection setup

use core_config::database::PostgresConfig;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

/// Open a pool sized from `config` and apply pending migrations when enabled.
pub async fn connect(config: &PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.connect_timeout)
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(options).await?;
    info!("Successfully connected to PostgreSQL database");

    if config.run_migrations {
        Migrator::up(&db, None).await?;
        info!("Database migrations applied");
    }

    Ok(db)
}

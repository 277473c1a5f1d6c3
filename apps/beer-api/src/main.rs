//! Beer API - REST server for beer stock management

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_beers::{BeerRepository, BeerService, InMemoryBeerRepository, PgBeerRepository};
use std::future::Future;
use tracing::{info, warn};

mod api;
mod config;
mod db;
mod openapi;

use config::{Config, StoreConfig};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    match config.store.clone() {
        StoreConfig::Memory => {
            info!("Using in-memory beer store");
            serve(&config, InMemoryBeerRepository::new(), async {}).await?;
        }
        StoreConfig::Postgres(pg) => {
            info!("Using PostgreSQL beer store");
            let db = db::connect(&pg)
                .await
                .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

            let pool = db.clone();
            let cleanup = async move {
                info!("Shutting down: closing PostgreSQL pool");
                if let Err(e) = pool.close().await {
                    warn!("Failed to close PostgreSQL pool: {}", e);
                }
            };

            serve(&config, PgBeerRepository::new(db), cleanup).await?;
        }
    }

    info!("Beer API shutdown complete");
    Ok(())
}

async fn serve<R, F>(config: &Config, repository: R, cleanup: F) -> eyre::Result<()>
where
    R: BeerRepository + Clone + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let service = BeerService::new(repository);
    let app = api::app(service, config.app, &config.server.cors_allowed_origins)?;

    info!("Starting Beer API on port {}", config.server.port);

    create_production_app(app, &config.server, cleanup)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))
}

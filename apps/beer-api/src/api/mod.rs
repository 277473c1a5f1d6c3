//! API routes module

pub mod beers;
pub mod health;

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use core_config::AppInfo;
use domain_beers::{BeerRepository, BeerService};

use crate::openapi::ApiDoc;

/// Create all API routes (nested under `/api` by `create_router`)
pub fn routes<R: BeerRepository + Clone + 'static>(service: BeerService<R>) -> Router {
    Router::new().nest("/v1/beers", beers::router(service))
}

/// Full application router: API, docs, liveness and readiness
pub fn app<R: BeerRepository + Clone + 'static>(
    service: BeerService<R>,
    app_info: AppInfo,
    cors_allowed_origins: &[String],
) -> std::io::Result<Router> {
    let router = create_router::<ApiDoc>(routes(service.clone()), cors_allowed_origins)?
        .merge(health_router(app_info))
        .merge(health::ready_router(service));

    Ok(router)
}

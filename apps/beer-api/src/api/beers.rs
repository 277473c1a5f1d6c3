//! Beers API routes

use axum::Router;
use domain_beers::{handlers, BeerRepository, BeerService};

/// Create beers router
pub fn router<R: BeerRepository + 'static>(service: BeerService<R>) -> Router {
    handlers::router(service)
}

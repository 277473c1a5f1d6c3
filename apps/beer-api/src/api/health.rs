//! Readiness endpoint

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use axum_helpers::server::{run_health_checks, HealthCheckFuture};
use domain_beers::{BeerRepository, BeerService};
use serde_json::Value;

async fn ready<R: BeerRepository + 'static>(
    State(service): State<BeerService<R>>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let store: HealthCheckFuture<'_> =
        Box::pin(async { service.ping().await.map_err(|e| e.to_string()) });

    run_health_checks(vec![("store", store)]).await
}

/// `/ready` reports 503 while the backing store is unreachable
pub fn ready_router<R: BeerRepository + Clone + 'static>(service: BeerService<R>) -> Router {
    Router::new()
        .route("/ready", get(ready::<R>))
        .with_state(service)
}

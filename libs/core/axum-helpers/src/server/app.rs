use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::{create_cors_layer, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Creates the application router with common middleware and documentation.
///
/// This function sets up:
/// - OpenAPI documentation (Swagger UI, ReDoc, RapiDoc, Scalar)
/// - API routes nested under `/api`
/// - Tracing, security headers and response compression
/// - A CORS layer when `cors_allowed_origins` is not empty
/// - JSON 404 / 405 fallbacks
///
/// Health endpoints are merged by the app with `health_router()` and its
/// own readiness handler.
///
/// # Errors
/// Returns `InvalidInput` if one of the CORS origins is not a valid header value.
///
/// # Example
/// ```ignore
/// let api_routes = Router::new().nest("/v1/beers", domain_beers::handlers::router(service));
/// let router = create_router::<ApiDoc>(api_routes, &config.server.cors_allowed_origins)?;
/// ```
pub fn create_router<T>(apis: Router, cors_allowed_origins: &[String]) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    let router = if cors_allowed_origins.is_empty() {
        info!("CORS_ALLOWED_ORIGIN not set, CORS layer disabled");
        router
    } else {
        info!(origins = ?cors_allowed_origins, "CORS configured");
        router.layer(create_cors_layer(cors_allowed_origins)?)
    };

    Ok(router.layer(CompressionLayer::new()))
}

/// Server with coordinated shutdown and cleanup.
///
/// Once a shutdown signal arrives the server stops accepting connections,
/// drains in-flight requests and runs `cleanup` (closing the database pool,
/// for example). Cleanup is bounded by `server_config.shutdown_timeout`.
///
/// # Example
/// ```ignore
/// let cleanup = async move {
///     if let Err(e) = db.close().await {
///         tracing::warn!("Failed to close database pool: {}", e);
///     }
/// };
///
/// create_production_app(router, &config.server, cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (coordinator, _rx) = ShutdownCoordinator::new();
    let shutdown_timeout = server_config.shutdown_timeout;

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let signal_handle = coordinator.clone();
    tokio::spawn(async move { signal_handle.wait_for_signal().await });

    let cleanup_handle = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move {
            coordinator.wait_for_shutdown().await;

            info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
            match tokio::time::timeout(shutdown_timeout, cleanup).await {
                Ok(_) => info!("Cleanup completed successfully"),
                Err(_) => warn!(
                    "Cleanup exceeded timeout of {:?}, forcing shutdown",
                    shutdown_timeout
                ),
            }
        })
    };

    let server_shutdown = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { server_shutdown.wait_for_shutdown().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // Server may have stopped on its own; make sure cleanup still runs
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http, http::StatusCode, routing::get};
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct TestDoc;

    fn api() -> Router {
        Router::new().route("/ping", get(|| async { "pong" }))
    }

    async fn status_of(router: Router, method: &str, uri: &str) -> StatusCode {
        router
            .oneshot(
                http::Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_api_routes_are_nested_under_api() {
        let router = create_router::<TestDoc>(api(), &[]).unwrap();
        assert_eq!(status_of(router, "GET", "/api/ping").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let router = create_router::<TestDoc>(api(), &[]).unwrap();
        assert_eq!(
            status_of(router, "GET", "/nowhere").await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let router = create_router::<TestDoc>(api(), &[]).unwrap();
        assert_eq!(
            status_of(router, "GET", "/api-docs/openapi.json").await,
            StatusCode::OK
        );
    }

    #[test]
    fn test_invalid_cors_origin_fails_router_creation() {
        let result = create_router::<TestDoc>(api(), &["bad\norigin".to_string()]);
        assert!(result.is_err());
    }
}

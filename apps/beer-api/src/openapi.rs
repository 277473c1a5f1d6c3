//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Beer API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Beer Stock API",
        version = "0.1.0",
        description = "Beer inventory with bounded stock adjustments",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/v1/beers", api = domain_beers::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;

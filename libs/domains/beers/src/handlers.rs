use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestResponse, BadRequestUuidResponse, BadRequestValidationResponse,
        ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::BeerResult;
use crate::models::{Beer, BeerType, CreateBeer, QuantityRequest};
use crate::repository::BeerRepository;
use crate::service::BeerService;

pub const TAG: &str = "beers";

/// OpenAPI documentation for the Beers API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_beers,
        create_beer,
        find_by_name,
        delete_beer,
        increment,
        decrement,
    ),
    components(
        schemas(Beer, BeerType, CreateBeer, QuantityRequest),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Beer stock management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the beer router with all HTTP endpoints
///
/// Lookup by name and deletion by id share a path segment, so the
/// segment is captured under one name and interpreted per handler.
pub fn router<R: BeerRepository + 'static>(service: BeerService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_beers).post(create_beer))
        .route("/{key}", get(find_by_name).delete(delete_beer))
        .route("/{key}/increment", patch(increment))
        .route("/{key}/decrement", patch(decrement))
        .with_state(shared_service)
}

/// List all beers
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All registered beers", body = Vec<Beer>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_beers<R: BeerRepository>(
    State(service): State<Arc<BeerService<R>>>,
) -> BeerResult<Json<Vec<Beer>>> {
    let beers = service.list_beers().await?;
    Ok(Json(beers))
}

/// Register a new beer
///
/// A name that is already registered is a conflict with existing state and
/// answers 409, not 400.
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateBeer,
    responses(
        (status = 201, description = "Beer registered", body = Beer),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_beer<R: BeerRepository>(
    State(service): State<Arc<BeerService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateBeer>,
) -> BeerResult<impl IntoResponse> {
    let beer = service.create_beer(input).await?;
    Ok((StatusCode::CREATED, Json(beer)))
}

/// Get a beer by name
#[utoipa::path(
    get,
    path = "/{name}",
    tag = TAG,
    params(
        ("name" = String, Path, description = "Beer name")
    ),
    responses(
        (status = 200, description = "Beer found", body = Beer),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn find_by_name<R: BeerRepository>(
    State(service): State<Arc<BeerService<R>>>,
    Path(name): Path<String>,
) -> BeerResult<Json<Beer>> {
    let beer = service.find_by_name(&name).await?;
    Ok(Json(beer))
}

/// Delete a beer
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Beer ID")
    ),
    responses(
        (status = 204, description = "Beer deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_beer<R: BeerRepository>(
    State(service): State<Arc<BeerService<R>>>,
    UuidPath(id): UuidPath,
) -> BeerResult<StatusCode> {
    service.delete_beer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add units to a beer's stock
#[utoipa::path(
    patch,
    path = "/{id}/increment",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Beer ID")
    ),
    request_body = QuantityRequest,
    responses(
        (status = 200, description = "Stock incremented", body = Beer),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn increment<R: BeerRepository>(
    State(service): State<Arc<BeerService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(body): ValidatedJson<QuantityRequest>,
) -> BeerResult<Json<Beer>> {
    let beer = service.increment(id, body.quantity).await?;
    Ok(Json(beer))
}

/// Remove units from a beer's stock
#[utoipa::path(
    patch,
    path = "/{id}/decrement",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Beer ID")
    ),
    request_body = QuantityRequest,
    responses(
        (status = 200, description = "Stock decremented", body = Beer),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn decrement<R: BeerRepository>(
    State(service): State<Arc<BeerService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(body): ValidatedJson<QuantityRequest>,
) -> BeerResult<Json<Beer>> {
    let beer = service.decrement(id, body.quantity).await?;
    Ok(Json(beer))
}

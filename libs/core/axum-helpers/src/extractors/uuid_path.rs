//! UUID path parameter extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// Extractor for a single UUID path parameter.
///
/// The parameter name in the route does not matter; the first (and only)
/// path segment capture is parsed. An unparsable value is rejected with a
/// 400 `INVALID_UUID` body.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::delete;
/// use axum_helpers::extractors::UuidPath;
///
/// async fn delete_beer(UuidPath(id): UuidPath) -> String {
///     format!("Deleting {}", id)
/// }
///
/// let app = Router::new().route("/beers/{id}", delete(delete_beer));
/// ```
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        Uuid::parse_str(&raw)
            .map(UuidPath)
            .map_err(|_| AppError::InvalidUuid(raw).into_response())
    }
}

//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Malformed bodies are rejected as `JSON_EXTRACTION` with the status axum
/// assigns (400, 415 or 422); bodies failing `Validate` are rejected with 400
/// and per-field details.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct QuantityRequest {
///     #[validate(range(min = 0, max = 500))]
///     quantity: i32,
/// }
///
/// async fn adjust(ValidatedJson(payload): ValidatedJson<QuantityRequest>) -> String {
///     format!("Adjusting by {}", payload.quantity)
/// }
///
/// let app = Router::new().route("/adjust", post(adjust));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http, http::StatusCode, routing::post};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct QuantityRequest {
        #[validate(range(min = 0, max = 500))]
        quantity: i32,
    }

    fn app() -> Router {
        Router::new().route(
            "/adjust",
            post(|ValidatedJson(body): ValidatedJson<QuantityRequest>| async move {
                body.quantity.to_string()
            }),
        )
    }

    fn request(body: &str) -> http::Request<Body> {
        http::Request::builder()
            .method("POST")
            .uri("/adjust")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        let response = app().oneshot(request(r#"{"quantity": 10}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_out_of_range_body_is_rejected() {
        let response = app().oneshot(request(r#"{"quantity": -1}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let response = app().oneshot(request("{quantity")).await.unwrap();
        assert!(response.status().is_client_error());
    }
}

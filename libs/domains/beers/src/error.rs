use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// How a missing beer was looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeerKey {
    Id(Uuid),
    Name(String),
}

impl fmt::Display for BeerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeerKey::Id(id) => write!(f, "Beer with id {} not found.", id),
            BeerKey::Name(name) => write!(f, "Beer with name {} not found", name),
        }
    }
}

#[derive(Debug, Error)]
pub enum BeerError {
    #[error("Beer with name {0} already registered in the system.")]
    AlreadyExists(String),

    #[error("{0}")]
    NotFound(BeerKey),

    #[error("Quantity {amount} informed for beer with id {id} exceeds the max stock capacity")]
    StockExceeded { id: Uuid, amount: i32 },

    #[error("Quantity must not be negative, got {0}")]
    InvalidAmount(i32),

    #[error("Database error: {0}")]
    Database(String),
}

pub type BeerResult<T> = Result<T, BeerError>;

impl BeerError {
    pub fn not_found_id(id: Uuid) -> Self {
        BeerError::NotFound(BeerKey::Id(id))
    }

    pub fn not_found_name(name: impl Into<String>) -> Self {
        BeerError::NotFound(BeerKey::Name(name.into()))
    }
}

/// Convert BeerError to AppError for standardized error responses
impl From<BeerError> for AppError {
    fn from(err: BeerError) -> Self {
        let message = err.to_string();
        match err {
            BeerError::AlreadyExists(_) => AppError::Conflict(message),
            BeerError::NotFound(_) => AppError::NotFound(message),
            BeerError::StockExceeded { .. } | BeerError::InvalidAmount(_) => {
                AppError::BadRequest(message)
            }
            BeerError::Database(_) => AppError::InternalServerError(message),
        }
    }
}

impl From<sea_orm::DbErr> for BeerError {
    fn from(err: sea_orm::DbErr) -> Self {
        BeerError::Database(err.to_string())
    }
}

impl IntoResponse for BeerError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

//! Beers Domain
//!
//! Stock management for beer products: unique names, bounded quantities and
//! existence checks guarding every mutation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, request validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Uniqueness and stock bound rules
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory / Postgres)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Beer, BeerType, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_beers::{
//!     handlers,
//!     repository::InMemoryBeerRepository,
//!     service::BeerService,
//! };
//!
//! let repository = InMemoryBeerRepository::new();
//! let service = BeerService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{BeerError, BeerKey, BeerResult};
pub use models::{Beer, BeerType, CreateBeer, QuantityRequest};
pub use postgres::PgBeerRepository;
pub use repository::{BeerRepository, InMemoryBeerRepository};
pub use service::BeerService;

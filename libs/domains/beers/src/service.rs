use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{BeerError, BeerResult};
use crate::models::{Beer, CreateBeer};
use crate::repository::BeerRepository;

/// Stock management rules on top of a BeerRepository.
///
/// Holds no state of its own; every call re-reads the repository.
#[derive(Clone)]
pub struct BeerService<R: BeerRepository> {
    repository: Arc<R>,
}

impl<R: BeerRepository> BeerService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Readiness probe for the backing store
    pub async fn ping(&self) -> BeerResult<()> {
        self.repository.ping().await
    }

    /// Register a new beer; names are unique.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_beer(&self, input: CreateBeer) -> BeerResult<Beer> {
        if self.repository.find_by_name(&input.name).await?.is_some() {
            return Err(BeerError::AlreadyExists(input.name));
        }

        self.repository.create(input).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> BeerResult<Beer> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| BeerError::not_found_name(name))
    }

    #[instrument(skip(self))]
    pub async fn list_beers(&self) -> BeerResult<Vec<Beer>> {
        self.repository.list_all().await
    }

    #[instrument(skip(self))]
    pub async fn delete_beer(&self, id: Uuid) -> BeerResult<()> {
        self.get_beer(id).await?;
        self.repository.delete_by_id(id).await
    }

    /// Add `amount` units; the result may reach but not pass `max`.
    #[instrument(skip(self))]
    pub async fn increment(&self, id: Uuid, amount: i32) -> BeerResult<Beer> {
        self.adjust(id, amount, i64::from(amount)).await
    }

    /// Remove `amount` units; the result may reach but not pass zero.
    #[instrument(skip(self))]
    pub async fn decrement(&self, id: Uuid, amount: i32) -> BeerResult<Beer> {
        self.adjust(id, amount, -i64::from(amount)).await
    }

    async fn get_beer(&self, id: Uuid) -> BeerResult<Beer> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| BeerError::not_found_id(id))
    }

    async fn adjust(&self, id: Uuid, amount: i32, delta: i64) -> BeerResult<Beer> {
        if amount < 0 {
            return Err(BeerError::InvalidAmount(amount));
        }

        let mut beer = self.get_beer(id).await?;

        match beer.adjusted_by(delta) {
            Some(quantity) => {
                beer.quantity = quantity;
                self.repository.save(beer).await
            }
            None => {
                tracing::info!(
                    beer_id = %id,
                    quantity = beer.quantity,
                    max = beer.max,
                    amount,
                    "Stock adjustment rejected"
                );
                Err(BeerError::StockExceeded { id, amount })
            }
        }
    }
}

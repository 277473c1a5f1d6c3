use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{BeerError, BeerResult};
use crate::models::{Beer, CreateBeer};

/// Repository trait for Beer persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BeerRepository: Send + Sync {
    /// Get a beer by ID
    async fn find_by_id(&self, id: Uuid) -> BeerResult<Option<Beer>>;

    /// Get a beer by its exact name
    async fn find_by_name(&self, name: &str) -> BeerResult<Option<Beer>>;

    /// Insert a new beer, assigning its id and timestamps
    async fn create(&self, input: CreateBeer) -> BeerResult<Beer>;

    /// Overwrite an existing beer
    async fn save(&self, beer: Beer) -> BeerResult<Beer>;

    /// Delete a beer by ID
    async fn delete_by_id(&self, id: Uuid) -> BeerResult<()>;

    /// All beers in creation order
    async fn list_all(&self) -> BeerResult<Vec<Beer>>;

    /// Cheap reachability probe used by readiness checks
    async fn ping(&self) -> BeerResult<()> {
        Ok(())
    }
}

/// In-memory implementation of BeerRepository (for development/testing)
///
/// Keys are v7 UUIDs, so map order is creation order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryBeerRepository {
    beers: Arc<RwLock<BTreeMap<Uuid, Beer>>>,
}

impl InMemoryBeerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BeerRepository for InMemoryBeerRepository {
    async fn find_by_id(&self, id: Uuid) -> BeerResult<Option<Beer>> {
        let beers = self.beers.read().await;
        Ok(beers.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> BeerResult<Option<Beer>> {
        let beers = self.beers.read().await;
        Ok(beers.values().find(|b| b.name == name).cloned())
    }

    async fn create(&self, input: CreateBeer) -> BeerResult<Beer> {
        let mut beers = self.beers.write().await;

        // Re-checked under the write lock
        if beers.values().any(|b| b.name == input.name) {
            return Err(BeerError::AlreadyExists(input.name));
        }

        let beer = Beer::new(input);
        beers.insert(beer.id, beer.clone());

        tracing::info!(beer_id = %beer.id, name = %beer.name, "Created beer");
        Ok(beer)
    }

    async fn save(&self, mut beer: Beer) -> BeerResult<Beer> {
        let mut beers = self.beers.write().await;

        let slot = beers
            .get_mut(&beer.id)
            .ok_or_else(|| BeerError::not_found_id(beer.id))?;

        beer.updated_at = Utc::now();
        *slot = beer.clone();

        tracing::info!(beer_id = %beer.id, quantity = beer.quantity, "Saved beer");
        Ok(beer)
    }

    async fn delete_by_id(&self, id: Uuid) -> BeerResult<()> {
        let mut beers = self.beers.write().await;

        match beers.remove(&id) {
            Some(_) => {
                tracing::info!(beer_id = %id, "Deleted beer");
                Ok(())
            }
            None => Err(BeerError::not_found_id(id)),
        }
    }

    async fn list_all(&self) -> BeerResult<Vec<Beer>> {
        let beers = self.beers.read().await;
        Ok(beers.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BeerType;

    fn input(name: &str) -> CreateBeer {
        CreateBeer {
            name: name.to_string(),
            brand: "Brahma".to_string(),
            max: 50,
            quantity: 10,
            beer_type: BeerType::Lager,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_is_findable() {
        let repo = InMemoryBeerRepository::new();
        let beer = repo.create(input("Ambev")).await.unwrap();

        assert_eq!(repo.find_by_id(beer.id).await.unwrap(), Some(beer.clone()));
        assert_eq!(repo.find_by_name("Ambev").await.unwrap(), Some(beer));
        assert_eq!(repo.find_by_name("ambev").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_name() {
        let repo = InMemoryBeerRepository::new();
        repo.create(input("Ambev")).await.unwrap();

        let err = repo.create(input("Ambev")).await.unwrap_err();
        assert!(matches!(err, BeerError::AlreadyExists(name) if name == "Ambev"));
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_keep_names_unique() {
        let repo = InMemoryBeerRepository::new();

        let results = futures::future::join_all((0..8).map(|_| {
            let repo = repo.clone();
            async move { repo.create(input("Ambev")).await }
        }))
        .await;

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_all_in_creation_order() {
        let repo = InMemoryBeerRepository::new();
        for name in ["Ambev", "Skol", "Bohemia"] {
            repo.create(input(name)).await.unwrap();
        }

        let names: Vec<_> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["Ambev", "Skol", "Bohemia"]);
    }

    #[tokio::test]
    async fn test_save_updates_in_place() {
        let repo = InMemoryBeerRepository::new();
        let mut beer = repo.create(input("Ambev")).await.unwrap();

        beer.quantity = 20;
        let saved = repo.save(beer.clone()).await.unwrap();

        assert_eq!(saved.id, beer.id);
        assert_eq!(saved.created_at, beer.created_at);
        assert_eq!(repo.find_by_id(beer.id).await.unwrap().unwrap().quantity, 20);
    }

    #[tokio::test]
    async fn test_save_unknown_beer_fails() {
        let repo = InMemoryBeerRepository::new();
        let beer = Beer::new(input("Ghost"));

        let err = repo.save(beer).await.unwrap_err();
        assert!(matches!(err, BeerError::NotFound(_)));
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let repo = InMemoryBeerRepository::new();
        let beer = repo.create(input("Ambev")).await.unwrap();

        repo.delete_by_id(beer.id).await.unwrap();
        assert_eq!(repo.find_by_id(beer.id).await.unwrap(), None);
        assert!(repo.delete_by_id(beer.id).await.is_err());
    }
}

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, SqlErr,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{BeerError, BeerResult},
    models::{Beer, CreateBeer},
    repository::BeerRepository,
};

/// PostgreSQL implementation of BeerRepository
///
/// Name uniqueness and the `0 <= quantity <= max` bound are also enforced
/// by the table constraints created in the migration.
#[derive(Clone)]
pub struct PgBeerRepository {
    db: DatabaseConnection,
}

impl PgBeerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Maps an insert failure, turning a unique-index hit on `name` into
/// `AlreadyExists`. `sql_err` is the driver classification of `err`.
fn insert_error(sql_err: Option<SqlErr>, err: DbErr, name: String) -> BeerError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(_)) => BeerError::AlreadyExists(name),
        _ => err.into(),
    }
}

#[async_trait]
impl BeerRepository for PgBeerRepository {
    async fn find_by_id(&self, id: Uuid) -> BeerResult<Option<Beer>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> BeerResult<Option<Beer>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Name.eq(name))
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn create(&self, input: CreateBeer) -> BeerResult<Beer> {
        let name = input.name.clone();
        let active_model: entity::ActiveModel = input.into();

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| insert_error(e.sql_err(), e, name))?;

        tracing::info!(beer_id = %model.id, name = %model.name, "Created beer");
        Ok(model.into())
    }

    async fn save(&self, beer: Beer) -> BeerResult<Beer> {
        let id = beer.id;
        let mut active_model: entity::ActiveModel = beer.into();
        active_model.updated_at = Set(Utc::now().into());

        let model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => BeerError::not_found_id(id),
            other => other.into(),
        })?;

        tracing::info!(beer_id = %id, quantity = model.quantity, "Saved beer");
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: Uuid) -> BeerResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(BeerError::not_found_id(id));
        }

        tracing::info!(beer_id = %id, "Deleted beer");
        Ok(())
    }

    async fn list_all(&self) -> BeerResult<Vec<Beer>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::CreatedAt)
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn ping(&self) -> BeerResult<()> {
        self.db.ping().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BeerKey;
    use crate::models::BeerType;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(name: &str, quantity: i32) -> entity::Model {
        let now = Utc::now();
        entity::Model {
            id: Uuid::now_v7(),
            name: name.to_string(),
            brand: "Brahma".to_string(),
            max: 50,
            quantity,
            beer_type: BeerType::Lager,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_name_maps_model() {
        let row = model("Ambev", 10);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row.clone()]])
            .into_connection();
        let repo = PgBeerRepository::new(db);

        let beer = repo.find_by_name("Ambev").await.unwrap().unwrap();
        assert_eq!(beer.id, row.id);
        assert_eq!(beer.quantity, 10);
        assert_eq!(beer.beer_type, BeerType::Lager);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgBeerRepository::new(db);

        assert!(repo.find_by_id(Uuid::now_v7()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let row = model("Ambev", 10);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row.clone()]])
            .into_connection();
        let repo = PgBeerRepository::new(db);

        let beer = repo
            .create(CreateBeer {
                name: "Ambev".to_string(),
                brand: "Brahma".to_string(),
                max: 50,
                quantity: 10,
                beer_type: BeerType::Lager,
            })
            .await
            .unwrap();
        assert_eq!(beer.name, "Ambev");
    }

    #[tokio::test]
    async fn test_save_returns_updated_row() {
        let mut row = model("Ambev", 10);
        let beer: Beer = row.clone().into();
        row.quantity = 20;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();
        let repo = PgBeerRepository::new(db);

        let saved = repo.save(Beer { quantity: 20, ..beer }).await.unwrap();
        assert_eq!(saved.quantity, 20);
    }

    #[tokio::test]
    async fn test_save_missing_row_is_not_found() {
        let beer: Beer = model("Ambev", 10).into();
        let id = beer.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgBeerRepository::new(db);

        let err = repo.save(Beer { quantity: 20, ..beer }).await.unwrap_err();
        assert!(matches!(err, BeerError::NotFound(BeerKey::Id(missing)) if missing == id));
    }

    #[test]
    fn test_unique_violation_on_insert_is_already_exists() {
        let err = insert_error(
            Some(SqlErr::UniqueConstraintViolation(
                "duplicate key value violates unique constraint \"idx_beers_name_unique\""
                    .to_string(),
            )),
            DbErr::Custom("duplicate key".to_string()),
            "Ambev".to_string(),
        );
        assert!(matches!(err, BeerError::AlreadyExists(name) if name == "Ambev"));
    }

    #[test]
    fn test_other_insert_failures_stay_database_errors() {
        let err = insert_error(
            Some(SqlErr::ForeignKeyConstraintViolation("fk".to_string())),
            DbErr::Custom("fk".to_string()),
            "Ambev".to_string(),
        );
        assert!(matches!(err, BeerError::Database(_)));

        let err = insert_error(None, DbErr::Custom("timeout".to_string()), "Ambev".to_string());
        assert!(matches!(err, BeerError::Database(msg) if msg.contains("timeout")));
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = PgBeerRepository::new(db);

        let err = repo.delete_by_id(Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, BeerError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_existing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = PgBeerRepository::new(db);

        assert!(repo.delete_by_id(Uuid::now_v7()).await.is_ok());
    }

    #[tokio::test]
    async fn test_database_failure_maps_to_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgBeerRepository::new(db);

        let err = repo.list_all().await.unwrap_err();
        assert!(matches!(err, BeerError::Database(msg) if msg.contains("connection reset")));
    }
}

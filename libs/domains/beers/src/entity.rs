use crate::models::{Beer, BeerType, CreateBeer};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the beers table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "beers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub brand: String,
    pub max: i32,
    pub quantity: i32,
    pub beer_type: BeerType,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Beer {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            brand: model.brand,
            max: model.max,
            quantity: model.quantity,
            beer_type: model.beer_type,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<CreateBeer> for ActiveModel {
    fn from(input: CreateBeer) -> Self {
        let now = chrono::Utc::now();

        ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(input.name),
            brand: Set(input.brand),
            max: Set(input.max),
            quantity: Set(input.quantity),
            beer_type: Set(input.beer_type),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}

impl From<Beer> for ActiveModel {
    fn from(beer: Beer) -> Self {
        ActiveModel {
            id: Set(beer.id),
            name: Set(beer.name),
            brand: Set(beer.brand),
            max: Set(beer.max),
            quantity: Set(beer.quantity),
            beer_type: Set(beer.beer_type),
            created_at: Set(beer.created_at.into()),
            updated_at: Set(beer.updated_at.into()),
        }
    }
}

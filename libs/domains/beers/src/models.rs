use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Beer style
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "beer_type")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerType {
    #[sea_orm(string_value = "LAGER")]
    Lager,
    #[sea_orm(string_value = "MALZBIER")]
    Malzbier,
    #[sea_orm(string_value = "WITBIER")]
    Witbier,
    #[sea_orm(string_value = "WEISS")]
    Weiss,
    #[sea_orm(string_value = "ALE")]
    Ale,
    #[sea_orm(string_value = "IPA")]
    Ipa,
    #[sea_orm(string_value = "STOUT")]
    Stout,
}

/// A stocked beer product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Beer {
    /// Unique identifier, assigned on creation
    pub id: Uuid,
    /// Product name, unique across the inventory
    pub name: String,
    pub brand: String,
    /// Stock capacity
    pub max: i32,
    /// Units currently in stock, always within `0..=max`
    pub quantity: i32,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Beer {
    /// Create a beer from validated input with a fresh v7 id.
    pub fn new(input: CreateBeer) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            brand: input.brand,
            max: input.max,
            quantity: input.quantity,
            beer_type: input.beer_type,
            created_at: now,
            updated_at: now,
        }
    }

    /// Quantity after applying `delta`, or `None` when the result would leave
    /// `0..=max`.
    ///
    /// Computed in `i64` so that no `i32` input can overflow.
    pub fn adjusted_by(&self, delta: i64) -> Option<i32> {
        let new_quantity = i64::from(self.quantity) + delta;
        if (0..=i64::from(self.max)).contains(&new_quantity) {
            i32::try_from(new_quantity).ok()
        } else {
            None
        }
    }
}

fn validate_quantity_within_max(input: &CreateBeer) -> Result<(), ValidationError> {
    if input.quantity > input.max {
        let mut err = ValidationError::new("quantity_exceeds_max");
        err.message = Some("quantity must not exceed max".into());
        return Err(err);
    }
    Ok(())
}

/// DTO for registering a new beer
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_quantity_within_max"))]
pub struct CreateBeer {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 200))]
    pub brand: String,
    #[validate(range(min = 1, max = 500, message = "max must be between 1 and 500"))]
    pub max: i32,
    /// Initial stock. Bounded only by `max` (schema rule above), so a beer can
    /// be registered full; there is no separate cap below 500.
    #[validate(range(min = 0, max = 500, message = "quantity must be between 0 and 500"))]
    pub quantity: i32,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
}

/// Body of the increment/decrement endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, ToSchema)]
pub struct QuantityRequest {
    #[validate(range(min = 0, max = 500, message = "quantity must be between 0 and 500"))]
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ambev(quantity: i32, max: i32) -> CreateBeer {
        CreateBeer {
            name: "Ambev".to_string(),
            brand: "Brahma".to_string(),
            max,
            quantity,
            beer_type: BeerType::Lager,
        }
    }

    #[test]
    fn test_beer_type_wire_names() {
        assert_eq!(serde_json::to_string(&BeerType::Malzbier).unwrap(), "\"MALZBIER\"");
        assert_eq!(BeerType::Ipa.to_string(), "IPA");
        assert_eq!(
            serde_json::from_str::<BeerType>("\"STOUT\"").unwrap(),
            BeerType::Stout
        );
    }

    #[test]
    fn test_beer_serializes_type_field() {
        let beer = Beer::new(ambev(10, 50));
        let json = serde_json::to_value(&beer).unwrap();
        assert_eq!(json["type"], "LAGER");
        assert!(json.get("beer_type").is_none());
    }

    #[test]
    fn test_adjusted_by_accepts_bounds() {
        let beer = Beer::new(ambev(10, 50));
        assert_eq!(beer.adjusted_by(40), Some(50));
        assert_eq!(beer.adjusted_by(-10), Some(0));
        assert_eq!(beer.adjusted_by(0), Some(10));
    }

    #[test]
    fn test_adjusted_by_rejects_out_of_range() {
        let beer = Beer::new(ambev(10, 50));
        assert_eq!(beer.adjusted_by(41), None);
        assert_eq!(beer.adjusted_by(-11), None);
        assert_eq!(beer.adjusted_by(i64::from(i32::MAX)), None);
        assert_eq!(beer.adjusted_by(-i64::from(i32::MAX)), None);
    }

    #[test]
    fn test_create_beer_validation() {
        assert!(ambev(10, 50).validate().is_ok());
        assert!(ambev(0, 1).validate().is_ok());
        assert!(ambev(10, 0).validate().is_err());
        assert!(ambev(10, 501).validate().is_err());
        assert!(ambev(-1, 50).validate().is_err());

        let mut blank = ambev(10, 50);
        blank.name = String::new();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_create_beer_quantity_above_max_is_rejected() {
        let errors = ambev(60, 50).validate().unwrap_err();
        assert!(errors.errors().contains_key("__all__"));
    }

    #[test]
    fn test_create_beer_can_start_full() {
        assert!(ambev(300, 300).validate().is_ok());
        assert!(ambev(500, 500).validate().is_ok());
        assert!(ambev(301, 300).validate().is_err());
    }

    #[test]
    fn test_quantity_request_range() {
        assert!(QuantityRequest { quantity: 0 }.validate().is_ok());
        assert!(QuantityRequest { quantity: 500 }.validate().is_ok());
        assert!(QuantityRequest { quantity: -5 }.validate().is_err());
        assert!(QuantityRequest { quantity: 501 }.validate().is_err());
    }
}

//! Game DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::Game;

/// Lowest accepted price.
pub const MIN_PRICE: f64 = 1.0;
/// Highest accepted price.
pub const MAX_PRICE: f64 = 1000.0;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating or fully replacing a game.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct GameInputModel {
    #[validate(length(
        min = 3,
        max = 100,
        message = "The game name must contain between 3 and 100 characters"
    ))]
    #[schema(min_length = 3, max_length = 100, example = "Chess")]
    pub name: String,

    #[validate(length(
        min = 3,
        max = 100,
        message = "The producer name must contain between 3 and 100 characters"
    ))]
    #[schema(min_length = 3, max_length = 100, example = "Acme")]
    pub producer: String,

    #[validate(
        range(
            min = MIN_PRICE,
            max = MAX_PRICE,
            message = "The price must be a minimum of 1 dollar and a maximum of 1000 dollars"
        ),
        custom(function = finite_price, message = "The price must be a number")
    )]
    #[schema(minimum = 1.0, maximum = 1000.0, example = 10.0)]
    pub price: f64,
}

/// Complements `range`, which accepts NaN.
fn finite_price(price: f64) -> Result<(), ValidationError> {
    if price.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}

/// Path parameter of the single-game routes.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct GameIdParams {
    pub id: Uuid,
}

/// Path parameters of the price-only update.
#[derive(Debug, Deserialize, Validate)]
pub struct PriceUpdateParams {
    pub id: Uuid,

    #[validate(
        range(
            min = MIN_PRICE,
            max = MAX_PRICE,
            message = "The price must be a minimum of 1 dollar and a maximum of 1000 dollars"
        ),
        custom(function = finite_price, message = "The price must be a number")
    )]
    pub price: f64,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Read projection of a stored game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct GameViewModel {
    pub id: Uuid,
    pub name: String,
    pub producer: String,
    pub price: f64,
}

impl From<Game> for GameViewModel {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            name: game.name,
            producer: game.producer,
            price: game.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn input(name: &str, producer: &str, price: f64) -> GameInputModel {
        GameInputModel {
            name: name.to_string(),
            producer: producer.to_string(),
            price,
        }
    }

    #[test]
    fn test_json_uses_pascal_case() {
        let parsed: GameInputModel =
            serde_json::from_str(r#"{"Name":"Chess","Producer":"Acme","Price":10}"#).unwrap();
        assert_eq!(parsed.name, "Chess");
        assert_eq!(parsed.producer, "Acme");
        assert_eq!(parsed.price, 10.0);

        let view = GameViewModel {
            id: Uuid::nil(),
            name: "Chess".to_string(),
            producer: "Acme".to_string(),
            price: 10.0,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["Id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["Name"], "Chess");
        assert_eq!(json["Producer"], "Acme");
        assert_eq!(json["Price"], 10.0);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let parsed = serde_json::from_str::<GameInputModel>(r#"{"Name":"Chess","Price":10}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert!(input("abc", "xyz", MIN_PRICE).validate().is_ok());
        assert!(input(&"a".repeat(100), &"b".repeat(100), MAX_PRICE).validate().is_ok());
        assert!(input("ab", "xyz", 10.0).validate().is_err());
        assert!(input("abc", &"b".repeat(101), 10.0).validate().is_err());
        assert!(input("abc", "xyz", 0.99).validate().is_err());
        assert!(input("abc", "xyz", 1000.01).validate().is_err());
    }

    #[test]
    fn test_price_params_validation() {
        let ok = PriceUpdateParams { id: Uuid::new_v4(), price: 15.0 };
        assert!(ok.validate().is_ok());
        let bad = PriceUpdateParams { id: Uuid::new_v4(), price: 5000.0 };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_non_finite_prices_are_rejected() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let params = PriceUpdateParams { id: Uuid::new_v4(), price };
            let errors = params.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("price"), "price {price}");
            assert!(input("Chess", "Acme", price).validate().is_err(), "price {price}");
        }
    }

    proptest! {
        #[test]
        fn prop_price_validation_matches_range(price in -10.0f64..2000.0) {
            let valid = input("Chess", "Acme", price).validate().is_ok();
            prop_assert_eq!(valid, (MIN_PRICE..=MAX_PRICE).contains(&price));
        }

        #[test]
        fn prop_name_length_validation(len in 0usize..150) {
            let name = "n".repeat(len);
            let valid = input(&name, "Acme", 10.0).validate().is_ok();
            prop_assert_eq!(valid, (3..=100).contains(&len));
        }
    }
}

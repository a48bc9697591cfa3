use crate::common::error::{AppError, ServiceResult};
use crate::entities::grounds::Ground as GroundEntity;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ground {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub size: String,
    pub price_per_hour: Decimal,
    pub image: Option<String>,
    pub features: Vec<String>,
    pub is_available: bool,
    pub average_rating: f64,
    pub review_count: i32,
    pub created_at: DateTime<Utc>,
}

impl From<GroundEntity> for Ground {
    fn from(entity: GroundEntity) -> Self {
        Ground {
            id: entity.id,
            name: entity.name,
            location: entity.location,
            size: entity.size,
            price_per_hour: entity.price_per_hour,
            image: entity.image,
            features: split_features(&entity.features),
            is_available: entity.is_available,
            average_rating: entity.average_rating,
            review_count: entity.review_count,
            created_at: entity.created_at.and_utc(),
        }
    }
}

/// Features arrive either as a JSON array or as a comma-joined string;
/// both collapse to the stored comma-joined form.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FeaturesInput {
    List(Vec<String>),
    Joined(String),
}

impl FeaturesInput {
    pub fn join(self) -> String {
        match self {
            FeaturesInput::List(items) => items
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(","),
            FeaturesInput::Joined(s) => s.trim().to_string(),
        }
    }
}

pub fn split_features(stored: &str) -> Vec<String> {
    stored
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateGroundRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    pub size: Option<String>,
    pub price_per_hour: Option<serde_json::Value>,
    pub image: Option<String>,
    pub features: Option<FeaturesInput>,
    pub is_available: Option<bool>,
}

/// The original accepted prices as numbers or numeric strings.
pub fn parse_price(value: &serde_json::Value) -> ServiceResult<Decimal> {
    let price = match value {
        serde_json::Value::String(s) => s.trim().parse::<Decimal>().ok(),
        serde_json::Value::Number(n) => n.to_string().parse::<Decimal>().ok(),
        _ => None,
    };
    match price {
        Some(p) if p > Decimal::ZERO => Ok(p),
        _ => Err(AppError::GroundsInvalidPrice),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_round_trip() {
        let input = FeaturesInput::List(vec![
            "Floodlights".to_string(),
            " Parking ".to_string(),
            "".to_string(),
        ]);
        let stored = input.join();
        assert_eq!(stored, "Floodlights,Parking");
        assert_eq!(split_features(&stored), vec!["Floodlights", "Parking"]);
        assert!(split_features("").is_empty());
    }

    #[test]
    fn price_accepts_numbers_and_numeric_strings() {
        assert_eq!(
            parse_price(&serde_json::json!("49.99")).unwrap(),
            Decimal::new(4999, 2)
        );
        assert_eq!(
            parse_price(&serde_json::json!(50)).unwrap(),
            Decimal::new(50, 0)
        );
        for bad in [
            serde_json::json!("free"),
            serde_json::json!(0),
            serde_json::json!(-3),
            serde_json::json!(null),
        ] {
            assert_eq!(parse_price(&bad).unwrap_err(), AppError::GroundsInvalidPrice);
        }
    }
}

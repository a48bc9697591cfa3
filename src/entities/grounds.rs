use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Ground {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub size: String,
    pub price_per_hour: Decimal,
    pub image: Option<String>,
    pub features: String,
    pub is_available: bool,
    pub average_rating: f64,
    pub review_count: i32,
    pub created_at: NaiveDateTime,
}

pub struct CreateGroundArgs {
    pub name: String,
    pub location: String,
    pub size: String,
    pub price_per_hour: Decimal,
    pub image: Option<String>,
    pub features: String,
    pub is_available: bool,
}

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub ground_id: i64,
    pub date: NaiveDate,
    pub time: String,
    pub status: String,
    pub total_amount: Decimal,
    pub created_at: NaiveDateTime,
}

/// Booking row joined with user and ground display fields for admin listings.
#[derive(Debug, FromRow)]
pub struct BookingWithRefs {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub ground_id: i64,
    pub ground_name: String,
    pub ground_location: String,
    pub date: NaiveDate,
    pub time: String,
    pub status: String,
    pub total_amount: Decimal,
    pub created_at: NaiveDateTime,
}

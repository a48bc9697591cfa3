use crate::entities::bookings::{Booking as BookingEntity, BookingWithRefs};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub ground_id: i64,
    pub date: NaiveDate,
    pub time: String,
    pub status: String,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<BookingEntity> for Booking {
    fn from(entity: BookingEntity) -> Self {
        Booking {
            id: entity.id,
            user_id: entity.user_id,
            ground_id: entity.ground_id,
            date: entity.date,
            time: entity.time,
            status: entity.status,
            total_amount: entity.total_amount,
            created_at: entity.created_at.and_utc(),
        }
    }
}

/// Booking with user and ground resolved, for admin listings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetail {
    pub id: i64,
    pub user: BookingUserRef,
    pub ground: BookingGroundRef,
    pub date: NaiveDate,
    pub time: String,
    pub status: String,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct BookingUserRef {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct BookingGroundRef {
    pub id: i64,
    pub name: String,
    pub location: String,
}

impl From<BookingWithRefs> for BookingDetail {
    fn from(entity: BookingWithRefs) -> Self {
        BookingDetail {
            id: entity.id,
            user: BookingUserRef {
                id: entity.user_id,
                name: entity.user_name,
                email: entity.user_email,
            },
            ground: BookingGroundRef {
                id: entity.ground_id,
                name: entity.ground_name,
                location: entity.ground_location,
            },
            date: entity.date,
            time: entity.time,
            status: entity.status,
            total_amount: entity.total_amount,
            created_at: entity.created_at.and_utc(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateBookingRequest {
    pub ground_id: Option<i64>,
    pub date: Option<String>,
    pub time: Option<String>,
}

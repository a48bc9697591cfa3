use chrono::NaiveDateTime;
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Review {
    pub id: i64,
    pub user_id: i64,
    pub ground_id: i64,
    pub rating: i32,
    pub comment: String,
    pub created_at: NaiveDateTime,
}

/// Review row joined with the reviewer's name.
#[derive(Debug, FromRow)]
pub struct ReviewWithUser {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub ground_id: i64,
    pub rating: i32,
    pub comment: String,
    pub created_at: NaiveDateTime,
}

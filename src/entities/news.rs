use chrono::NaiveDateTime;
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct NewsItem {
    pub id: i64,
    pub kind: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}

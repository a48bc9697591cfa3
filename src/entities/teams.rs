use chrono::NaiveDateTime;
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub captain: String,
    pub password_hash: String,
    pub logo: Option<String>,
    pub current_league_id: Option<i64>,
    pub matches_played: i32,
    pub wins: i32,
    pub created_at: NaiveDateTime,
}

/// Team row joined with its current league's name.
#[derive(Debug, FromRow)]
pub struct TeamWithLeague {
    pub id: i64,
    pub name: String,
    pub captain: String,
    pub logo: Option<String>,
    pub current_league_id: Option<i64>,
    pub league_name: Option<String>,
    pub matches_played: i32,
    pub wins: i32,
    pub created_at: NaiveDateTime,
}
